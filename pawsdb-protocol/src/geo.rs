//! Geolocation value types: points, ellipses, polygons.
//!
//! A `GeoLocation` is a tagged choice between a point (an `Ellipse`) and a
//! region (a `Polygon`) with no explicit discriminator key on the wire: the
//! tag is inferred from which key is present. Both-set and neither-set are
//! representable and are rejected at validation time, never at parse time.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::error::ProtocolError;
use crate::fields;
use serde::Serialize;
use serde_json::Value;

/// A WGS84 coordinate pair. Latitude and longitude travel as decimal-degree
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Point {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::CENTER)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::LATITUDE => out.latitude = Some(decode::as_string(child, name)?),
                fields::LONGITUDE => out.longitude = Some(decode::as_string(child, name)?),
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

/// An ellipse centered on a point, with optional axes in meters and an
/// orientation in degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_major_axis: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_minor_axis: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Ellipse {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::POINT)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::CENTER => out.center = Some(Point::from_json_with(child, policy)?),
                fields::SEMI_MAJOR_AXIS => {
                    out.semi_major_axis = Some(decode::as_f64(child, name)?)
                }
                fields::SEMI_MINOR_AXIS => {
                    out.semi_minor_axis = Some(decode::as_f64(child, name)?)
                }
                fields::ORIENTATION => out.orientation = Some(decode::as_f64(child, name)?),
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

/// A closed region described by its exterior vertices.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exterior: Vec<Point>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Polygon {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::REGION)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::EXTERIOR => out.exterior = decode::decode_vec(child, name, policy)?,
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

/// Which of the two location encodings a `GeoLocation` carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationShape {
    Point,
    Region,
    Neither,
    Both,
}

/// A device location: point XOR region, plus a confidence percentage that is
/// meaningful only for regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Ellipse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Polygon>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl GeoLocation {
    /// Resolves the implicit point/region discriminator.
    pub fn shape(&self) -> LocationShape {
        match (&self.point, &self.region) {
            (Some(_), Some(_)) => LocationShape::Both,
            (Some(_), None) => LocationShape::Point,
            (None, Some(_)) => LocationShape::Region,
            (None, None) => LocationShape::Neither,
        }
    }
}

impl FromJson for GeoLocation {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::LOCATION)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::POINT => out.point = Some(Ellipse::from_json_with(child, policy)?),
                fields::REGION => out.region = Some(Polygon::from_json_with(child, policy)?),
                fields::CONFIDENCE => out.confidence = Some(decode::as_i32(child, name)?),
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
