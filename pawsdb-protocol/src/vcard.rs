//! vCard-style contact records used for owners, operators, and registrants.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::error::ProtocolError;
use crate::fields;
use serde::Serialize;
use serde_json::Value;

/// Organization name property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VcardOrg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for VcardOrg {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::ORG)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::TEXT => out.text = Some(decode::as_string(child, name)?),
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

/// Structured postal address property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VcardAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for VcardAddress {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::ADR)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::STREET => out.street = Some(decode::as_string(child, name)?),
                fields::LOCALITY => out.locality = Some(decode::as_string(child, name)?),
                fields::REGION => out.region = Some(decode::as_string(child, name)?),
                fields::CODE => out.code = Some(decode::as_string(child, name)?),
                fields::COUNTRY => out.country = Some(decode::as_string(child, name)?),
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

/// Telephone property carrying a tel: URI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VcardTelephone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for VcardTelephone {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::TEL)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
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

/// Email property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VcardEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for VcardEmail {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::EMAIL)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::TEXT => out.text = Some(decode::as_string(child, name)?),
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

/// A vCard contact record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vcard {
    /// Formatted name ("fn" on the wire).
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<VcardOrg>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adr: Option<VcardAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel: Option<VcardTelephone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<VcardEmail>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Vcard {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::OWNER)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::FULL_NAME => out.full_name = Some(decode::as_string(child, name)?),
                fields::ORG => out.org = Some(VcardOrg::from_json_with(child, policy)?),
                fields::ADR => out.adr = Some(VcardAddress::from_json_with(child, policy)?),
                fields::TEL => out.tel = Some(VcardTelephone::from_json_with(child, policy)?),
                fields::EMAIL => out.email = Some(VcardEmail::from_json_with(child, policy)?),
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
