//! Device descriptors, antennas, capabilities, and ownership records.
//!
//! A `DeviceDescriptor` supports two parallel regulatory vocabularies (FCC
//! and ETSI) distinguished only by which optional fields are populated; the
//! wire carries no discriminator. `regime()` resolves the implicit choice,
//! and both-populated is rejected at validation time.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::error::ProtocolError;
use crate::fields;
use crate::spectrum::FrequencyRange;
use crate::vcard::Vcard;
use serde::Serialize;
use serde_json::Value;

/// Which regulatory field vocabulary a descriptor carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegulatoryRegime {
    Fcc,
    Etsi,
    Neither,
    Both,
}

/// Identifies a white-space device to the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcc_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcc_tvbd_device_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsi_en_device_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsi_device_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsi_en_technology_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etsi_en_device_emissions_class: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ruleset_ids: Vec<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl DeviceDescriptor {
    /// Resolves the implicit FCC/ETSI discriminator from populated fields.
    pub fn regime(&self) -> RegulatoryRegime {
        let fcc = self.fcc_id.is_some() || self.fcc_tvbd_device_type.is_some();
        let etsi = self.etsi_en_device_type.is_some()
            || self.etsi_device_category.is_some()
            || self.etsi_en_technology_id.is_some()
            || self.etsi_en_device_emissions_class.is_some();
        match (fcc, etsi) {
            (true, true) => RegulatoryRegime::Both,
            (true, false) => RegulatoryRegime::Fcc,
            (false, true) => RegulatoryRegime::Etsi,
            (false, false) => RegulatoryRegime::Neither,
        }
    }
}

impl FromJson for DeviceDescriptor {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::DEVICE_DESC)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::SERIAL_NUMBER => out.serial_number = Some(decode::as_string(child, name)?),
                fields::MANUFACTURER_ID => {
                    out.manufacturer_id = Some(decode::as_string(child, name)?)
                }
                fields::MODEL_ID => out.model_id = Some(decode::as_string(child, name)?),
                fields::FCC_ID => out.fcc_id = Some(decode::as_string(child, name)?),
                fields::FCC_TVBD_DEVICE_TYPE => {
                    out.fcc_tvbd_device_type = Some(decode::as_string(child, name)?)
                }
                fields::ETSI_EN_DEVICE_TYPE => {
                    out.etsi_en_device_type = Some(decode::as_string(child, name)?)
                }
                fields::ETSI_DEVICE_CATEGORY => {
                    out.etsi_device_category = Some(decode::as_string(child, name)?)
                }
                fields::ETSI_EN_TECHNOLOGY_ID => {
                    out.etsi_en_technology_id = Some(decode::as_string(child, name)?)
                }
                fields::ETSI_EN_DEVICE_EMISSIONS_CLASS => {
                    out.etsi_en_device_emissions_class = Some(decode::as_string(child, name)?)
                }
                fields::RULESET_IDS => out.ruleset_ids = decode::decode_string_vec(child, name)?,
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

/// Transmit antenna characteristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntennaCharacteristics {
    /// Height in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Height reference: "AGL" (above ground level) or "AMSL" (above mean
    /// sea level).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_uncertainty: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for AntennaCharacteristics {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::ANTENNA)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::HEIGHT => out.height = Some(decode::as_f64(child, name)?),
                fields::HEIGHT_TYPE => out.height_type = Some(decode::as_string(child, name)?),
                fields::HEIGHT_UNCERTAINTY => {
                    out.height_uncertainty = Some(decode::as_f64(child, name)?)
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

/// The frequency ranges a device can operate over.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frequency_ranges: Vec<FrequencyRange>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for DeviceCapabilities {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::CAPABILITIES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::FREQUENCY_RANGES => {
                    out.frequency_ranges = decode::decode_vec(child, name, policy)?
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

/// Registered ownership: the owner vCard is required by validation, the
/// operator is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Vcard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<Vcard>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for DeviceOwner {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::DEVICE_OWNER)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::OWNER => out.owner = Some(Vcard::from_json_with(child, policy)?),
                fields::OPERATOR => out.operator = Some(Vcard::from_json_with(child, policy)?),
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
