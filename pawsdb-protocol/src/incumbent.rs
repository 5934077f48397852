//! Region-management records: incumbents, channel info, device validities,
//! and database-change announcements.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::device::DeviceDescriptor;
use crate::error::ProtocolError;
use crate::event::EventTime;
use crate::fields;
use crate::geo::GeoLocation;
use crate::vcard::Vcard;
use serde::Serialize;
use serde_json::Value;

/// A TV channel / frequency pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvSpectrum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for TvSpectrum {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::TV_SPECTRUM)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::CHANNEL => out.channel = Some(decode::as_i32(child, name)?),
                fields::FREQUENCY_HZ => out.frequency_hz = Some(decode::as_f64(child, name)?),
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

/// A protected incumbent registration. The same shape travels in
/// addIncumbent requests and getIncumbents responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incumbent {
    /// Protection class, e.g. "MVPD", "LPAux", "TBAS".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incumbent_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmit_location: Option<GeoLocation>,

    /// Receive site; required for MVPD registrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receive_location: Option<GeoLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tv_spectrum: Option<TvSpectrum>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Incumbent {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::INCUMBENTS)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::INCUMBENT_TYPE => {
                    out.incumbent_type = Some(decode::as_string(child, name)?)
                }
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

/// Validity verdict for one slave device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceValidity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_desc: Option<DeviceDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for DeviceValidity {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::DEVICE_VALIDITIES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::DEVICE_DESC => {
                    out.device_desc = Some(DeviceDescriptor::from_json_with(child, policy)?)
                }
                fields::IS_VALID => out.is_valid = Some(decode::as_bool(child, name)?),
                fields::REASON => out.reason = Some(decode::as_string(child, name)?),
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

/// One channel row in a getChannelList response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hz: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_hz: Option<f64>,

    #[serde(rename = "maxPowerDBm", skip_serializing_if = "Option::is_none")]
    pub max_power_dbm: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_count: Option<i64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for ChannelInfo {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::CHANNELS)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::CHANNEL_ID => out.channel_id = Some(decode::as_string(child, name)?),
                fields::START_HZ => out.start_hz = Some(decode::as_f64(child, name)?),
                fields::STOP_HZ => out.stop_hz = Some(decode::as_f64(child, name)?),
                fields::MAX_POWER_DBM => out.max_power_dbm = Some(decode::as_f64(child, name)?),
                fields::DEVICE_COUNT => out.device_count = Some(decode::as_i64(child, name)?),
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

/// Points a device at one alternate database.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for DatabaseSpec {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::DATABASES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::NAME => out.name = Some(decode::as_string(child, name)?),
                fields::URI => out.uri = Some(decode::as_string(child, name)?),
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

/// Announces that the set of available databases has changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbUpdateSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub databases: Vec<DatabaseSpec>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for DbUpdateSpec {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::DATABASE_CHANGE)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::DATABASES => out.databases = decode::decode_vec(child, name, policy)?,
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
