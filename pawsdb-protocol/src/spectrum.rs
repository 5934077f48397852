//! Spectrum value types: frequency ranges, power profiles, schedules, and
//! ruleset descriptors.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::error::ProtocolError;
use crate::event::EventTime;
use crate::fields;
use serde::Serialize;
use serde_json::Value;

/// A contiguous frequency range in hertz.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hz: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_hz: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,

    #[serde(rename = "maxPowerDBm", skip_serializing_if = "Option::is_none")]
    pub max_power_dbm: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for FrequencyRange {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::FREQUENCY_RANGES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::START_HZ => out.start_hz = Some(decode::as_f64(child, name)?),
                fields::STOP_HZ => out.stop_hz = Some(decode::as_f64(child, name)?),
                fields::CHANNEL_ID => out.channel_id = Some(decode::as_string(child, name)?),
                fields::MAX_POWER_DBM => out.max_power_dbm = Some(decode::as_f64(child, name)?),
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

/// One point of a power profile: maximum permitted power at a frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpectrumProfilePoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hz: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbm: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for SpectrumProfilePoint {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::PROFILES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::HZ => out.hz = Some(decode::as_f64(child, name)?),
                fields::DBM => out.dbm = Some(decode::as_f64(child, name)?),
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

/// An ordered list of profile points. On the wire each profile is a bare
/// JSON array, so `profiles` is an array of arrays of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpectrumProfile {
    pub points: Vec<SpectrumProfilePoint>,
}

impl FromJson for SpectrumProfile {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        Ok(Self {
            points: decode::decode_vec(value, fields::PROFILES, policy)?,
        })
    }
}

/// Per-channel power data at one resolution bandwidth.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spectrum {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_bw_hz: Option<f64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<SpectrumProfile>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frequency_ranges: Vec<FrequencyRange>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for Spectrum {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::SPECTRA)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::RESOLUTION_BW_HZ => {
                    out.resolution_bw_hz = Some(decode::as_f64(child, name)?)
                }
                fields::PROFILES => out.profiles = decode::decode_vec(child, name, policy)?,
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

/// Spectra valid over one event time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<EventTime>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectra: Vec<Spectrum>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for SpectrumSchedule {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::SPECTRUM_SCHEDULES)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::EVENT_TIME => out.event_time = Some(EventTime::from_json_with(child, policy)?),
                fields::SPECTRA => out.spectra = decode::decode_vec(child, name, policy)?,
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

/// Identifies the regulatory ruleset a response was computed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesetInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruleset_id: Option<String>,

    /// Meters of movement after which a device must re-query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_location_change: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_polling_secs: Option<i64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for RulesetInfo {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::RULESET_INFO)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::AUTHORITY => out.authority = Some(decode::as_string(child, name)?),
                fields::RULESET_ID => out.ruleset_id = Some(decode::as_string(child, name)?),
                fields::MAX_LOCATION_CHANGE => {
                    out.max_location_change = Some(decode::as_f64(child, name)?)
                }
                fields::MAX_POLLING_SECS => {
                    out.max_polling_secs = Some(decode::as_i64(child, name)?)
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

/// Everything a database says about spectrum under one ruleset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectrumSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruleset_info: Option<RulesetInfo>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spectrum_schedules: Vec<SpectrumSchedule>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_bw_hz: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contiguous_bw_hz: Option<f64>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for SpectrumSpec {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::SPECTRUM_SPECS)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::RULESET_INFO => {
                    out.ruleset_info = Some(RulesetInfo::from_json_with(child, policy)?)
                }
                fields::SPECTRUM_SCHEDULES => {
                    out.spectrum_schedules = decode::decode_vec(child, name, policy)?
                }
                fields::MAX_TOTAL_BW_HZ => out.max_total_bw_hz = Some(decode::as_f64(child, name)?),
                fields::MAX_CONTIGUOUS_BW_HZ => {
                    out.max_contiguous_bw_hz = Some(decode::as_f64(child, name)?)
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_spectrum() -> Value {
        json!({
            "resolutionBwHz": 6e6,
            "profiles": [
                [
                    {"hz": 518e6, "dbm": 30.0},
                    {"hz": 524e6, "dbm": 30.0}
                ],
                [
                    {"hz": 524e6, "dbm": 36.0},
                    {"hz": 530e6, "dbm": 36.0}
                ]
            ]
        })
    }

    #[test]
    fn test_spectrum_decode() {
        let spectrum = Spectrum::from_json(&sample_spectrum()).unwrap();
        assert_eq!(spectrum.resolution_bw_hz, Some(6e6));
        assert_eq!(spectrum.profiles.len(), 2);
        assert_eq!(spectrum.profiles[0].points.len(), 2);
        assert_eq!(spectrum.profiles[1].points[0].dbm, Some(36.0));
    }

    #[test]
    fn test_profiles_serialize_as_nested_arrays() {
        let spectrum = Spectrum::from_json(&sample_spectrum()).unwrap();
        let encoded = serde_json::to_value(&spectrum).unwrap();
        assert!(encoded["profiles"][0].is_array());
        assert_eq!(encoded["profiles"][0][0]["hz"], json!(518e6));
    }

    #[test]
    fn test_spectrum_roundtrip() {
        let spectrum = Spectrum::from_json(&sample_spectrum()).unwrap();
        let encoded = serde_json::to_value(&spectrum).unwrap();
        let decoded = Spectrum::from_json(&encoded).unwrap();
        assert_eq!(spectrum, decoded);
    }

    #[test]
    fn test_frequency_range_decode() {
        let value = json!({"startHz": 512e6, "stopHz": "518000000", "channelId": "21", "maxPowerDBm": 36.0});
        let range = FrequencyRange::from_json(&value).unwrap();
        assert_eq!(range.start_hz, Some(512e6));
        assert_eq!(range.stop_hz, Some(518e6));
        assert_eq!(range.channel_id.as_deref(), Some("21"));
        assert_eq!(range.max_power_dbm, Some(36.0));
    }

    #[test]
    fn test_spectrum_schedule_decode() {
        let value = json!({
            "eventTime": {
                "startTime": "2026-03-01T00:00:00Z",
                "stopTime": "2026-03-02T00:00:00Z"
            },
            "spectra": [sample_spectrum()]
        });
        let schedule = SpectrumSchedule::from_json(&value).unwrap();
        assert!(schedule.event_time.is_some());
        assert_eq!(schedule.spectra.len(), 1);
    }

    #[test]
    fn test_ruleset_info_decode() {
        let value = json!({
            "authority": "us",
            "rulesetId": "FccTvBandWhiteSpace-2010",
            "maxLocationChange": 100.0,
            "maxPollingSecs": 86400
        });
        let info = RulesetInfo::from_json(&value).unwrap();
        assert_eq!(info.authority.as_deref(), Some("us"));
        assert_eq!(info.max_polling_secs, Some(86400));
    }

    #[test]
    fn test_spectrum_spec_decode() {
        let value = json!({
            "rulesetInfo": {"authority": "us", "rulesetId": "FccTvBandWhiteSpace-2010"},
            "spectrumSchedules": [],
            "maxTotalBwHz": 18e6,
            "maxContiguousBwHz": 12e6
        });
        let spec = SpectrumSpec::from_json(&value).unwrap();
        assert_eq!(spec.max_total_bw_hz, Some(18e6));
        assert!(spec.spectrum_schedules.is_empty());
    }

    #[test]
    fn test_bad_profile_point_fails() {
        let value = json!({"profiles": [[{"hz": "wide", "dbm": 30.0}]]});
        let err = Spectrum::from_json(&value).unwrap_err();
        assert!(err.to_string().contains("hz"));
    }
}
