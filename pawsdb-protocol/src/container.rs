//! Polymorphic parameter and result containers.
//!
//! One wire format serves every method: `params` (and `result`) is a flat
//! object whose recognized field set is the union of all methods' fields.
//! The containers decode everything they recognize, keep the rest in the
//! unknown-field overflow map, and are then narrowed into per-method
//! projections by `pawsdb-core`. A container is constructed fresh per
//! request and discarded after projection.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::device::{AntennaCharacteristics, DeviceCapabilities, DeviceDescriptor, DeviceOwner};
use crate::error::ProtocolError;
use crate::event::EventTime;
use crate::fields;
use crate::geo::GeoLocation;
use crate::incumbent::{ChannelInfo, DbUpdateSpec, DeviceValidity, Incumbent, TvSpectrum};
use crate::spectrum::{RulesetInfo, Spectrum, SpectrumSpec};
use crate::vcard::Vcard;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// The union of every method's request parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    /// Message type tag, e.g. "INIT_REQ".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_descs: Vec<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_device_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_owner: Option<DeviceOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<DeviceOwner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub antenna: Option<AntennaCharacteristics>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<DeviceCapabilities>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectra: Vec<Spectrum>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub incumbent_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmit_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_spectrum: Option<TvSpectrum>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for RequestParams {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, "params")?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::TYPE => out.message_type = Some(decode::as_string(child, name)?),
                fields::VERSION => out.version = Some(decode::as_string(child, name)?),
                fields::DEVICE_DESC => {
                    out.device_desc = Some(DeviceDescriptor::from_json_with(child, policy)?)
                }
                fields::MASTER_DEVICE_DESC => {
                    out.master_device_desc = Some(DeviceDescriptor::from_json_with(child, policy)?)
                }
                fields::DEVICE_DESCS => out.device_descs = decode::decode_vec(child, name, policy)?,
                fields::LOCATION => {
                    out.location = Some(GeoLocation::from_json_with(child, policy)?)
                }
                fields::LOCATIONS => out.locations = decode::decode_vec(child, name, policy)?,
                fields::MASTER_DEVICE_LOCATION => {
                    out.master_device_location = Some(GeoLocation::from_json_with(child, policy)?)
                }
                fields::DEVICE_OWNER => {
                    out.device_owner = Some(DeviceOwner::from_json_with(child, policy)?)
                }
                fields::OWNER => out.owner = Some(DeviceOwner::from_json_with(child, policy)?),
                fields::ANTENNA => {
                    out.antenna = Some(AntennaCharacteristics::from_json_with(child, policy)?)
                }
                fields::CAPABILITIES => {
                    out.capabilities = Some(DeviceCapabilities::from_json_with(child, policy)?)
                }
                fields::REQUEST_TYPE => out.request_type = Some(decode::as_string(child, name)?),
                fields::SPECTRA => out.spectra = decode::decode_vec(child, name, policy)?,
                fields::START_TIME => out.start_time = Some(decode::as_datetime(child, name)?),
                fields::END_TIME => out.end_time = Some(decode::as_datetime(child, name)?),
                fields::REQUESTOR => out.requestor = Some(Vcard::from_json_with(child, policy)?),
                fields::INCUMBENT_TYPE => {
                    out.incumbent_type = Some(decode::as_string(child, name)?)
                }
                fields::SERIAL_NUMBER => out.serial_number = Some(decode::as_string(child, name)?),
                fields::REGISTRANT => out.registrant = Some(Vcard::from_json_with(child, policy)?),
                fields::CONTACT => out.contact = Some(Vcard::from_json_with(child, policy)?),
                fields::TRANSMIT_LOCATION => {
                    out.transmit_location = Some(GeoLocation::from_json_with(child, policy)?)
                }
                fields::RECEIVE_LOCATION => {
                    out.receive_location = Some(GeoLocation::from_json_with(child, policy)?)
                }
                fields::EVENT => out.event = Some(EventTime::from_json_with(child, policy)?),
                fields::TV_SPECTRUM => {
                    out.tv_spectrum = Some(TvSpectrum::from_json_with(child, policy)?)
                }
                _ => {
                    if policy.retains() {
                        out.unknown.insert(name.clone(), child.clone());
                    }
                }
            }
        }
        Ok(out)
    }
}

/// The union of every method's response fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFields {
    /// Message type tag, e.g. "AVAIL_SPECTRUM_RESP".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ruleset_infos: Vec<RulesetInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_change: Option<DbUpdateSpec>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectrum_specs: Vec<SpectrumSpec>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_validities: Vec<DeviceValidity>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelInfo>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub incumbents: Vec<Incumbent>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl ResultFields {
    /// Serializes into the `result` member of a response envelope.
    pub fn to_value(&self) -> Result<Value, ProtocolError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FromJson for ResultFields {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, "result")?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::TYPE => out.message_type = Some(decode::as_string(child, name)?),
                fields::VERSION => out.version = Some(decode::as_string(child, name)?),
                fields::TIMESTAMP => out.timestamp = Some(decode::as_datetime(child, name)?),
                fields::DEVICE_DESC => {
                    out.device_desc = Some(DeviceDescriptor::from_json_with(child, policy)?)
                }
                fields::RULESET_INFOS => {
                    out.ruleset_infos = decode::decode_vec(child, name, policy)?
                }
                fields::DATABASE_CHANGE => {
                    out.database_change = Some(DbUpdateSpec::from_json_with(child, policy)?)
                }
                fields::SPECTRUM_SPECS => {
                    out.spectrum_specs = decode::decode_vec(child, name, policy)?
                }
                fields::DEVICE_VALIDITIES => {
                    out.device_validities = decode::decode_vec(child, name, policy)?
                }
                fields::CHANNELS => out.channels = decode::decode_vec(child, name, policy)?,
                fields::INCUMBENTS => out.incumbents = decode::decode_vec(child, name, policy)?,
                fields::DEVICES => out.devices = decode::decode_vec(child, name, policy)?,
                fields::MESSAGE => out.message = Some(decode::as_string(child, name)?),
                _ => {
                    if policy.retains() {
                        out.unknown.insert(name.clone(), child.clone());
                    }
                }
            }
        }
        Ok(out)
    }
}
