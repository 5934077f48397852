//! The decode → project → validate pipeline.
//!
//! Raw JSON goes through the envelope decoder, the generic parameter
//! container, the method-selected projection, and finally the validation
//! pass. Decode errors abort before validation runs; validation violations
//! are returned as data together with the ready-to-serialize error
//! envelope. Every call allocates fresh state and touches no globals.

use crate::request::PawsRequest;
use crate::response::{rejection_response, violations_response};
use crate::validate::Violation;
use pawsdb_protocol::{Method, ProtocolError, RequestEnvelope, ResponseEnvelope, UnknownFieldPolicy};

/// A decoded and projected request, not yet validated.
#[derive(Debug, Clone)]
pub struct DecodedRequest {
    /// Request ID, echoed in the response.
    pub id: String,

    /// Protocol version string from the envelope.
    pub jsonrpc: String,

    pub method: Method,

    pub request: PawsRequest,
}

impl DecodedRequest {
    /// Projects a parsed envelope: resolves the method, decodes the
    /// container, and narrows it to the method's field set.
    pub fn from_envelope(envelope: &RequestEnvelope) -> Result<Self, ProtocolError> {
        Self::from_envelope_with(envelope, UnknownFieldPolicy::default())
    }

    pub fn from_envelope_with(
        envelope: &RequestEnvelope,
        policy: UnknownFieldPolicy,
    ) -> Result<Self, ProtocolError> {
        let method = envelope.method()?;
        let params = envelope.decode_params_with(policy)?;
        tracing::debug!(method = %method, id = %envelope.id, "decoded request");
        Ok(Self {
            id: envelope.id.clone(),
            jsonrpc: envelope.jsonrpc.clone(),
            method,
            request: PawsRequest::project(method, params),
        })
    }

    /// Runs the method's rule set, collecting every violation.
    pub fn validate(&self) -> Vec<Violation> {
        self.request.validate()
    }
}

/// Decodes a raw request document without validating it.
pub fn decode_request(json: &str) -> Result<DecodedRequest, ProtocolError> {
    let envelope = RequestEnvelope::from_json(json)?;
    DecodedRequest::from_envelope(&envelope)
}

/// Outcome of running a raw document through the full pipeline.
#[derive(Debug)]
pub enum Outcome {
    /// Decoded and fully valid; hand the request to business logic.
    Valid(DecodedRequest),

    /// Decoded, but the rule set was violated. The response envelope
    /// enumerates the complete violation list.
    Invalid {
        request: DecodedRequest,
        violations: Vec<Violation>,
        response: ResponseEnvelope,
    },

    /// The document could not be decoded at all.
    Rejected {
        error: ProtocolError,
        response: ResponseEnvelope,
    },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid(_))
    }
}

/// Runs the full pipeline over a raw request document.
pub fn process_request(json: &str) -> Outcome {
    let envelope = match RequestEnvelope::from_json(json) {
        Ok(envelope) => envelope,
        Err(error) => {
            tracing::warn!(error = %error, "request rejected before decoding");
            let response = rejection_response("", &error);
            return Outcome::Rejected { error, response };
        }
    };

    let decoded = match DecodedRequest::from_envelope(&envelope) {
        Ok(decoded) => decoded,
        Err(error) => {
            tracing::warn!(id = %envelope.id, error = %error, "request rejected");
            let response = rejection_response(&envelope.id, &error);
            return Outcome::Rejected { error, response };
        }
    };

    let violations = decoded.validate();
    if violations.is_empty() {
        Outcome::Valid(decoded)
    } else {
        tracing::warn!(
            id = %decoded.id,
            method = %decoded.method,
            count = violations.len(),
            "request failed validation"
        );
        let response = violations_response(&decoded.id, &violations);
        Outcome::Invalid {
            request: decoded,
            violations,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use serde_json::json;

    fn register_document() -> String {
        json!({
            "jsonrpc": "2.0",
            "id": "req-1",
            "method": "spectrum.paws.register",
            "params": {
                "deviceDesc": {"serialNumber": "SN-0001", "fccId": "ABC-9000"},
                "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
                "deviceOwner": {"owner": {"fn": "Acme"}}
            }
        })
        .to_string()
    }

    #[test]
    fn test_valid_register_pipeline() {
        let outcome = process_request(&register_document());
        match outcome {
            Outcome::Valid(decoded) => {
                assert_eq!(decoded.id, "req-1");
                assert_eq!(decoded.method, Method::Register);
                assert!(matches!(decoded.request, PawsRequest::Register(_)));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_missing_device_owner_aggregates_into_error_response() {
        let mut doc: serde_json::Value = serde_json::from_str(&register_document()).unwrap();
        doc["params"].as_object_mut().unwrap().remove("deviceOwner");

        let outcome = process_request(&doc.to_string());
        match outcome {
            Outcome::Invalid {
                violations,
                response,
                ..
            } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "deviceOwner");
                assert_eq!(response.id, "req-1");
                let error = response.error.unwrap();
                assert_eq!(error.code, 201);
                assert!(error
                    .data
                    .unwrap()
                    .contains(messages::REQUIRED_DEVICE_OWNER));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let outcome = process_request("{this is not json");
        match outcome {
            Outcome::Rejected { error, response } => {
                assert!(matches!(error, ProtocolError::Json(_)));
                assert_eq!(response.error.unwrap().code, 202);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method_is_rejected_with_id() {
        let doc = json!({
            "jsonrpc": "2.0",
            "id": "req-7",
            "method": "spectrum.paws.timeTravel",
            "params": {}
        })
        .to_string();

        let outcome = process_request(&doc);
        match outcome {
            Outcome::Rejected { error, response } => {
                assert!(matches!(error, ProtocolError::UnknownMethod(_)));
                assert_eq!(response.id, "req-7");
                assert_eq!(response.error.unwrap().code, 103);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_field_type_error_aborts_before_validation() {
        let doc = json!({
            "jsonrpc": "2.0",
            "id": "req-3",
            "method": "spectrum.paws.getSpectrum",
            "params": {
                "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}, "semiMajorAxis": "wide"}}
            }
        })
        .to_string();

        let outcome = process_request(&doc);
        match outcome {
            Outcome::Rejected { error, .. } => {
                assert!(error.to_string().contains("semiMajorAxis"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_batch_pipeline_end_to_end() {
        let doc = json!({
            "jsonrpc": "2.0",
            "id": "req-4",
            "method": "spectrum.paws.getSpectrumBatch",
            "params": {
                "deviceDesc": {"serialNumber": "SN-0001", "fccId": "ABC-9000"},
                "locations": [
                    {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
                    {"point": {"center": {"latitude": "40.0", "longitude": "-105.0"}}}
                ]
            }
        })
        .to_string();

        let outcome = process_request(&doc);
        match outcome {
            Outcome::Valid(decoded) => match decoded.request {
                PawsRequest::AvailSpectrumBatch(batch) => {
                    assert_eq!(batch.locations.len(), 2);
                }
                other => panic!("wrong variant: {other:?}"),
            },
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_decode_request_entry_point() {
        let decoded = decode_request(&register_document()).unwrap();
        assert_eq!(decoded.method, Method::Register);
        assert!(decoded.validate().is_empty());
    }
}
