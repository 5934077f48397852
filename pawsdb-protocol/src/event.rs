//! Event times and recurrence intervals.

use crate::decode::{self, FromJson, UnknownFieldPolicy, UnknownFields};
use crate::error::ProtocolError;
use crate::fields;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A recurrence rule bounding how an event repeats. Exactly one of `count`
/// and `until` must be set; validation enforces this.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceInterval {
    /// Repeat frequency, e.g. "DAILY" or "WEEKLY".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,

    /// Multiplier on the frequency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,

    /// Number of occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    /// Last instant of the final occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for RecurrenceInterval {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::RECURRENCE)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::FREQUENCY => out.frequency = Some(decode::as_string(child, name)?),
                fields::INTERVAL => out.interval = Some(decode::as_i32(child, name)?),
                fields::COUNT => out.count = Some(decode::as_i32(child, name)?),
                fields::UNTIL => out.until = Some(decode::as_datetime(child, name)?),
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

/// A time interval, optionally recurring. Instants are RFC 3339 on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceInterval>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl FromJson for EventTime {
    fn from_json_with(value: &Value, policy: UnknownFieldPolicy) -> Result<Self, ProtocolError> {
        let map = decode::expect_object(value, fields::EVENT_TIME)?;
        let mut out = Self::default();
        for (name, child) in map {
            if decode::is_empty(child) {
                continue;
            }
            match name.as_str() {
                fields::START_TIME => out.start_time = Some(decode::as_datetime(child, name)?),
                fields::STOP_TIME => out.stop_time = Some(decode::as_datetime(child, name)?),
                fields::RECURRENCE => {
                    out.recurrence = Some(RecurrenceInterval::from_json_with(child, policy)?)
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

    #[test]
    fn test_event_time_decode() {
        let value = json!({
            "startTime": "2026-03-01T12:00:00Z",
            "stopTime": "2026-03-01T18:00:00Z"
        });
        let et = EventTime::from_json(&value).unwrap();
        assert!(et.start_time.unwrap() < et.stop_time.unwrap());
    }

    #[test]
    fn test_event_time_bad_timestamp_names_field() {
        let value = json!({"startTime": "noon-ish"});
        let err = EventTime::from_json(&value).unwrap_err();
        assert!(err.to_string().contains("startTime"));
    }

    #[test]
    fn test_recurrence_decode() {
        let value = json!({
            "startTime": "2026-03-01T12:00:00Z",
            "stopTime": "2026-03-01T18:00:00Z",
            "recurrence": {"frequency": "DAILY", "interval": 1, "count": 10}
        });
        let et = EventTime::from_json(&value).unwrap();
        let rec = et.recurrence.unwrap();
        assert_eq!(rec.frequency.as_deref(), Some("DAILY"));
        assert_eq!(rec.count, Some(10));
        assert!(rec.until.is_none());
    }

    #[test]
    fn test_event_time_roundtrip() {
        let value = json!({
            "startTime": "2026-03-01T12:00:00Z",
            "stopTime": "2026-03-02T12:00:00Z",
            "recurrence": {"frequency": "WEEKLY", "until": "2026-06-01T00:00:00Z"}
        });
        let et = EventTime::from_json(&value).unwrap();
        let encoded = serde_json::to_value(&et).unwrap();
        let decoded = EventTime::from_json(&encoded).unwrap();
        assert_eq!(et, decoded);
    }

    #[test]
    fn test_offset_timestamps_normalize_to_utc() {
        let value = json!({"startTime": "2026-03-01T12:00:00+02:00"});
        let et = EventTime::from_json(&value).unwrap();
        assert_eq!(
            et.start_time.unwrap(),
            "2026-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
