//! Per-method request projections.
//!
//! Each method narrows the generic parameter container into its own fixed
//! field set. There is no generic "select N fields" mechanism: every method
//! has an explicit, hardcoded mapping. Projection consumes the container,
//! never re-parses JSON, and never fails; a required-but-absent field stays
//! default and is caught by validation.

use chrono::{DateTime, Utc};
use pawsdb_protocol::{
    AntennaCharacteristics, DeviceCapabilities, DeviceDescriptor, DeviceOwner, EventTime,
    GeoLocation, Incumbent, Method, RequestParams, Spectrum, Vcard,
};
use serde::Serialize;

/// Initialization handshake.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// Device registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_owner: Option<DeviceOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antenna: Option<AntennaCharacteristics>,
}

/// Single-location spectrum-availability query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailSpectrumRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DeviceOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antenna: Option<AntennaCharacteristics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<DeviceCapabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
}

/// Batched spectrum-availability query over multiple locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailSpectrumBatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DeviceOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antenna: Option<AntennaCharacteristics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<DeviceCapabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
}

/// Spectrum-use notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectra: Vec<Spectrum>,
}

/// Slave-device validity query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyDeviceRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_descs: Vec<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_desc: Option<DeviceDescriptor>,
}

/// Interference query over a location and time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterferenceQueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Vcard>,
}

/// Incumbent registration (region-management extension).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddIncumbentRequest {
    pub incumbent: Incumbent,
}

/// Incumbent removal (region-management extension).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveIncumbentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incumbent_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmit_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventTime>,
}

/// Incumbent listing (region-management extension).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIncumbentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incumbent_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// Channel listing for a location (region-management extension).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetChannelListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,
}

/// Registered-device listing for a location (region-management extension).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDeviceListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incumbent_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

/// The method-selected request variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PawsRequest {
    Init(InitRequest),
    Register(RegisterRequest),
    AvailSpectrum(AvailSpectrumRequest),
    AvailSpectrumBatch(AvailSpectrumBatchRequest),
    Notify(NotifyRequest),
    VerifyDevice(VerifyDeviceRequest),
    InterferenceQuery(InterferenceQueryRequest),
    AddIncumbent(AddIncumbentRequest),
    RemoveIncumbents(RemoveIncumbentsRequest),
    GetIncumbents(GetIncumbentsRequest),
    GetChannelList(GetChannelListRequest),
    GetDeviceList(GetDeviceListRequest),
}

impl PawsRequest {
    /// Narrows the decoded container into the request for one method by
    /// moving out exactly the fields that method defines.
    pub fn project(method: Method, params: RequestParams) -> Self {
        match method {
            Method::Init => PawsRequest::Init(InitRequest {
                version: params.version,
                device_desc: params.device_desc,
                location: params.location,
            }),
            Method::Register => PawsRequest::Register(RegisterRequest {
                version: params.version,
                device_desc: params.device_desc,
                location: params.location,
                device_owner: params.device_owner,
                antenna: params.antenna,
            }),
            Method::GetSpectrum => PawsRequest::AvailSpectrum(AvailSpectrumRequest {
                device_desc: params.device_desc,
                location: params.location,
                owner: params.owner,
                antenna: params.antenna,
                capabilities: params.capabilities,
                master_device_desc: params.master_device_desc,
                master_device_location: params.master_device_location,
                request_type: params.request_type,
            }),
            Method::GetSpectrumBatch => {
                PawsRequest::AvailSpectrumBatch(AvailSpectrumBatchRequest {
                    device_desc: params.device_desc,
                    locations: params.locations,
                    owner: params.owner,
                    antenna: params.antenna,
                    capabilities: params.capabilities,
                    master_device_desc: params.master_device_desc,
                    master_device_location: params.master_device_location,
                    request_type: params.request_type,
                })
            }
            Method::NotifySpectrumUse => PawsRequest::Notify(NotifyRequest {
                device_desc: params.device_desc,
                location: params.location,
                master_device_desc: params.master_device_desc,
                master_device_location: params.master_device_location,
                spectra: params.spectra,
            }),
            Method::VerifyDevice => PawsRequest::VerifyDevice(VerifyDeviceRequest {
                device_descs: params.device_descs,
                master_device_desc: params.master_device_desc,
            }),
            Method::InterferenceQuery => {
                PawsRequest::InterferenceQuery(InterferenceQueryRequest {
                    device_desc: params.device_desc,
                    location: params.location,
                    start_time: params.start_time,
                    end_time: params.end_time,
                    request_type: params.request_type,
                    requestor: params.requestor,
                })
            }
            Method::AddIncumbent => PawsRequest::AddIncumbent(AddIncumbentRequest {
                incumbent: Incumbent {
                    incumbent_type: params.incumbent_type,
                    registrant: params.registrant,
                    contact: params.contact,
                    transmit_location: params.transmit_location,
                    receive_location: params.receive_location,
                    event: params.event,
                    tv_spectrum: params.tv_spectrum,
                    unknown: Default::default(),
                },
            }),
            Method::RemoveIncumbents => PawsRequest::RemoveIncumbents(RemoveIncumbentsRequest {
                incumbent_type: params.incumbent_type,
                serial_number: params.serial_number,
                transmit_location: params.transmit_location,
                event: params.event,
            }),
            Method::GetIncumbents => PawsRequest::GetIncumbents(GetIncumbentsRequest {
                incumbent_type: params.incumbent_type,
                location: params.location,
            }),
            Method::GetChannelList => PawsRequest::GetChannelList(GetChannelListRequest {
                location: params.location,
                device_desc: params.device_desc,
            }),
            Method::GetDeviceList => PawsRequest::GetDeviceList(GetDeviceListRequest {
                incumbent_type: params.incumbent_type,
                location: params.location,
            }),
        }
    }

    /// Returns the method this request was projected for.
    pub fn method(&self) -> Method {
        match self {
            PawsRequest::Init(_) => Method::Init,
            PawsRequest::Register(_) => Method::Register,
            PawsRequest::AvailSpectrum(_) => Method::GetSpectrum,
            PawsRequest::AvailSpectrumBatch(_) => Method::GetSpectrumBatch,
            PawsRequest::Notify(_) => Method::NotifySpectrumUse,
            PawsRequest::VerifyDevice(_) => Method::VerifyDevice,
            PawsRequest::InterferenceQuery(_) => Method::InterferenceQuery,
            PawsRequest::AddIncumbent(_) => Method::AddIncumbent,
            PawsRequest::RemoveIncumbents(_) => Method::RemoveIncumbents,
            PawsRequest::GetIncumbents(_) => Method::GetIncumbents,
            PawsRequest::GetChannelList(_) => Method::GetChannelList,
            PawsRequest::GetDeviceList(_) => Method::GetDeviceList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawsdb_protocol::FromJson;
    use serde_json::json;

    #[test]
    fn test_notify_projection_exposes_exactly_its_fields() {
        let params = RequestParams::from_json(&json!({
            "deviceDesc": {"serialNumber": "SN-1", "fccId": "ABC-9000"},
            "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
            "spectra": [{"resolutionBwHz": 6e6, "profiles": [[{"hz": 518e6, "dbm": 30.0}]]}],
            "deviceOwner": {"owner": {"fn": "Acme"}}
        }))
        .unwrap();

        let request = PawsRequest::project(Method::NotifySpectrumUse, params);
        match request {
            PawsRequest::Notify(notify) => {
                assert!(notify.device_desc.is_some());
                assert!(notify.location.is_some());
                assert_eq!(notify.spectra.len(), 1);
                assert!(notify.master_device_desc.is_none());
                assert!(notify.master_device_location.is_none());
                // deviceOwner is not part of the notify contract; the
                // serialized surface carries only the fields above
                let surface = serde_json::to_value(&notify).unwrap();
                assert!(surface.get("deviceOwner").is_none());
            }
            other => panic!("projected into wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_batch_projection_keeps_each_location() {
        let params = RequestParams::from_json(&json!({
            "deviceDesc": {"serialNumber": "SN-1"},
            "locations": [
                {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
                {"point": {"center": {"latitude": "40.0", "longitude": "-105.0"}}}
            ]
        }))
        .unwrap();

        let request = PawsRequest::project(Method::GetSpectrumBatch, params);
        match request {
            PawsRequest::AvailSpectrumBatch(batch) => {
                assert_eq!(batch.locations.len(), 2);
                assert!(batch.locations.iter().all(|l| l.point.is_some()));
            }
            other => panic!("projected into wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_projection_never_fails_on_missing_fields() {
        let request = PawsRequest::project(Method::Register, RequestParams::default());
        match request {
            PawsRequest::Register(register) => {
                assert!(register.device_desc.is_none());
                assert!(register.location.is_none());
                assert!(register.device_owner.is_none());
            }
            other => panic!("projected into wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_add_incumbent_projection_assembles_record() {
        let params = RequestParams::from_json(&json!({
            "incumbentType": "LPAux",
            "registrant": {"fn": "Stage Mics Inc."},
            "transmitLocation": {"point": {"center": {"latitude": "40.0", "longitude": "-105.0"}}},
            "event": {"startTime": "2026-03-01T00:00:00Z", "stopTime": "2026-03-02T00:00:00Z"},
            "tvSpectrum": {"channel": 21}
        }))
        .unwrap();

        let request = PawsRequest::project(Method::AddIncumbent, params);
        match request {
            PawsRequest::AddIncumbent(add) => {
                assert_eq!(add.incumbent.incumbent_type.as_deref(), Some("LPAux"));
                assert!(add.incumbent.transmit_location.is_some());
                assert_eq!(add.incumbent.tv_spectrum.unwrap().channel, Some(21));
            }
            other => panic!("projected into wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_method_roundtrip() {
        for method in Method::ALL {
            let request = PawsRequest::project(method, RequestParams::default());
            assert_eq!(request.method(), method);
        }
    }
}
