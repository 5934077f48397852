//! Typed response builders.
//!
//! Business logic hands back typed payloads; these builders populate the
//! generic result container (with the method's response type tag) and the
//! error path renders decode failures and validation violations into single
//! well-formed error envelopes.

use crate::messages;
use crate::validate::{Violation, ViolationKind};
use pawsdb_protocol::{
    ChannelInfo, DbUpdateSpec, DeviceDescriptor, DeviceValidity, ErrorBody, ErrorCode, Incumbent,
    ProtocolError, ResponseEnvelope, ResultFields, RulesetInfo, SpectrumSpec, PAWS_VERSION,
};

fn base(message_type: &str) -> ResultFields {
    ResultFields {
        message_type: Some(message_type.to_string()),
        version: Some(PAWS_VERSION.to_string()),
        ..Default::default()
    }
}

pub fn init_response(
    ruleset_infos: Vec<RulesetInfo>,
    database_change: Option<DbUpdateSpec>,
) -> ResultFields {
    ResultFields {
        ruleset_infos,
        database_change,
        ..base("INIT_RESP")
    }
}

pub fn register_response(ruleset_infos: Vec<RulesetInfo>) -> ResultFields {
    ResultFields {
        ruleset_infos,
        ..base("REGISTRATION_RESP")
    }
}

pub fn avail_spectrum_response(
    device_desc: Option<DeviceDescriptor>,
    spectrum_specs: Vec<SpectrumSpec>,
) -> ResultFields {
    ResultFields {
        device_desc,
        spectrum_specs,
        ..base("AVAIL_SPECTRUM_RESP")
    }
}

pub fn avail_spectrum_batch_response(
    device_desc: Option<DeviceDescriptor>,
    spectrum_specs: Vec<SpectrumSpec>,
) -> ResultFields {
    ResultFields {
        device_desc,
        spectrum_specs,
        ..base("AVAIL_SPECTRUM_BATCH_RESP")
    }
}

pub fn notify_response() -> ResultFields {
    base("SPECTRUM_USE_NOTIFY_RESP")
}

pub fn verify_device_response(device_validities: Vec<DeviceValidity>) -> ResultFields {
    ResultFields {
        device_validities,
        ..base("DEV_VALID_RESP")
    }
}

pub fn interference_query_response(message: Option<String>) -> ResultFields {
    ResultFields {
        message,
        ..base("INTERFERENCE_QUERY_RESP")
    }
}

pub fn add_incumbent_response(message: Option<String>) -> ResultFields {
    ResultFields {
        message,
        ..base("ADD_INCUMBENT_RESP")
    }
}

pub fn remove_incumbents_response(message: Option<String>) -> ResultFields {
    ResultFields {
        message,
        ..base("REMOVE_INCUMBENTS_RESP")
    }
}

pub fn get_incumbents_response(incumbents: Vec<Incumbent>) -> ResultFields {
    ResultFields {
        incumbents,
        ..base("GET_INCUMBENTS_RESP")
    }
}

pub fn get_channel_list_response(channels: Vec<ChannelInfo>) -> ResultFields {
    ResultFields {
        channels,
        ..base("GET_CHANNEL_LIST_RESP")
    }
}

pub fn get_device_list_response(devices: Vec<DeviceDescriptor>) -> ResultFields {
    ResultFields {
        devices,
        ..base("GET_DEVICE_LIST_RESP")
    }
}

/// Renders a decode failure as an error envelope.
pub fn rejection_response(id: &str, error: &ProtocolError) -> ResponseEnvelope {
    ResponseEnvelope::error(id, ErrorBody::new(error.error_code(), error.to_string()))
}

/// Renders a complete violation set as one error envelope. The code is
/// Missing when any required rule fired, InvalidValue otherwise, and the
/// data member enumerates every violation.
pub fn violations_response(id: &str, violations: &[Violation]) -> ResponseEnvelope {
    let any_required = violations
        .iter()
        .any(|v| v.kind == ViolationKind::Required);
    let (code, summary) = if any_required {
        (ErrorCode::Missing, messages::MSG_MISSING)
    } else {
        (ErrorCode::InvalidValue, messages::MSG_INVALID)
    };
    let data = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");
    ResponseEnvelope::error(id, ErrorBody::new(code, summary).with_data(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_type_tags() {
        assert_eq!(
            init_response(Vec::new(), None).message_type.as_deref(),
            Some("INIT_RESP")
        );
        assert_eq!(
            notify_response().message_type.as_deref(),
            Some("SPECTRUM_USE_NOTIFY_RESP")
        );
        assert_eq!(
            verify_device_response(Vec::new()).message_type.as_deref(),
            Some("DEV_VALID_RESP")
        );
    }

    #[test]
    fn test_response_roundtrips_through_envelope() {
        let result = register_response(vec![RulesetInfo {
            authority: Some("us".to_string()),
            ruleset_id: Some("FccTvBandWhiteSpace-2010".to_string()),
            ..Default::default()
        }]);
        let envelope = ResponseEnvelope::ok("req-1", result.to_value().unwrap());

        let json = envelope.to_json().unwrap();
        let parsed = ResponseEnvelope::from_json(&json).unwrap();
        let decoded = parsed.decode_result().unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn test_violations_response_missing() {
        let violations = vec![
            Violation::new("deviceDesc", ViolationKind::Required, messages::REQUIRED_DEVICE_DESC),
            Violation::new(
                "location.confidence",
                ViolationKind::InvalidValue,
                messages::INVALID_CONFIDENCE,
            ),
        ];
        let response = violations_response("req-9", &violations);
        let error = response.error.unwrap();
        assert_eq!(error.code, 201);
        assert_eq!(error.message, messages::MSG_MISSING);
        let data = error.data.unwrap();
        assert!(data.contains("deviceDesc: DeviceDescriptor is Required"));
        assert!(data.contains("location.confidence"));
    }

    #[test]
    fn test_violations_response_invalid_only() {
        let violations = vec![Violation::new(
            "location",
            ViolationKind::MutuallyExclusive,
            messages::EXCLUSIVE_POINT_REGION,
        )];
        let response = violations_response("req-9", &violations);
        assert_eq!(response.error.unwrap().code, 202);
    }

    #[test]
    fn test_rejection_response() {
        let error = ProtocolError::UnknownMethod("spectrum.paws.bogus".to_string());
        let response = rejection_response("req-2", &error);
        assert_eq!(response.id, "req-2");
        let body = response.error.unwrap();
        assert_eq!(body.code, ErrorCode::Unimplemented.code());
        assert!(body.message.contains("spectrum.paws.bogus"));
    }
}
