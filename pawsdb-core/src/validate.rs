//! Validation rule set.
//!
//! Validation runs over an already-fully-decoded value graph and is a pure
//! function: each request type yields the complete ordered list of violated
//! rules rather than stopping at the first failure, so a caller can report
//! every problem in one round trip. Composite fields are validated
//! recursively; cross-field invariants (mutual exclusion, time ordering,
//! recurrence bounds) have dedicated rule code.

use crate::messages;
use crate::request::*;
use pawsdb_protocol::{
    AntennaCharacteristics, DeviceCapabilities, DeviceDescriptor, DeviceOwner, ErrorCode,
    EventTime, FrequencyRange, GeoLocation, Incumbent, LocationShape, RegulatoryRegime, Spectrum,
    Vcard,
};
use serde::Serialize;

/// Classifies a violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    Required,
    Length,
    MutuallyExclusive,
    InvalidValue,
}

/// One violated rule: the offending field path, the rule class, and the
/// catalog message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: &'static str,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: &'static str) -> Self {
        Self {
            field: field.into(),
            kind,
            message,
        }
    }

    /// Maps the rule class onto the wire error code family.
    pub fn error_code(&self) -> ErrorCode {
        match self.kind {
            ViolationKind::Required => ErrorCode::Missing,
            _ => ErrorCode::InvalidValue,
        }
    }
}

fn child(path: &str, name: &str) -> String {
    format!("{path}.{name}")
}

fn indexed(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn required(out: &mut Vec<Violation>, field: impl Into<String>, message: &'static str) {
    out.push(Violation::new(field, ViolationKind::Required, message));
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

fn check_max_len(
    out: &mut Vec<Violation>,
    field: String,
    value: &Option<String>,
    max: usize,
    message: &'static str,
) {
    if let Some(s) = value {
        if s.chars().count() > max {
            out.push(Violation::new(field, ViolationKind::Length, message));
        }
    }
}

fn check_coordinate(
    out: &mut Vec<Violation>,
    field: String,
    value: &Option<String>,
    required_message: &'static str,
) {
    match value.as_deref().map(str::trim) {
        None | Some("") => out.push(Violation::new(field, ViolationKind::Required, required_message)),
        Some(coordinate) if coordinate.parse::<f64>().is_err() => out.push(Violation::new(
            field,
            ViolationKind::InvalidValue,
            messages::INVALID_COORDINATE,
        )),
        _ => {}
    }
}

// ============================================================================
// Composite validators
// ============================================================================

pub(crate) fn validate_device_descriptor(
    out: &mut Vec<Violation>,
    path: &str,
    desc: &DeviceDescriptor,
) {
    if is_blank(&desc.serial_number) {
        required(
            out,
            child(path, "serialNumber"),
            messages::REQUIRED_SERIAL_NUMBER,
        );
    }
    check_max_len(
        out,
        child(path, "serialNumber"),
        &desc.serial_number,
        64,
        messages::LENGTH_SERIAL_NUMBER,
    );
    check_max_len(
        out,
        child(path, "manufacturerId"),
        &desc.manufacturer_id,
        64,
        messages::LENGTH_MANUFACTURER_ID,
    );
    check_max_len(
        out,
        child(path, "modelId"),
        &desc.model_id,
        64,
        messages::LENGTH_MODEL_ID,
    );

    if let Some(fcc_id) = &desc.fcc_id {
        let len = fcc_id.chars().count();
        if !(5..=19).contains(&len) {
            out.push(Violation::new(
                child(path, "fccId"),
                ViolationKind::Length,
                messages::LENGTH_FCC_ID,
            ));
        }
    }

    // The wire carries no FCC/ETSI discriminator; both vocabularies at once
    // is the one regime state the codec itself rejects.
    if desc.regime() == RegulatoryRegime::Both {
        out.push(Violation::new(
            path,
            ViolationKind::MutuallyExclusive,
            messages::EXCLUSIVE_FCC_ETSI,
        ));
    }

    if let Some(category) = &desc.etsi_device_category {
        if !category.eq_ignore_ascii_case("master") && !category.eq_ignore_ascii_case("slave") {
            out.push(Violation::new(
                child(path, "etsiDeviceCategory"),
                ViolationKind::InvalidValue,
                messages::INVALID_DEVICE_CATEGORY,
            ));
        }
    }
}

pub(crate) fn validate_geolocation(out: &mut Vec<Violation>, path: &str, location: &GeoLocation) {
    match location.shape() {
        LocationShape::Both => {
            out.push(Violation::new(
                path,
                ViolationKind::MutuallyExclusive,
                messages::EXCLUSIVE_POINT_REGION,
            ));
        }
        LocationShape::Neither => {
            required(out, path, messages::REQUIRED_LOCATION);
        }
        LocationShape::Point => {
            if let Some(ellipse) = &location.point {
                let point_path = child(path, "point");
                match &ellipse.center {
                    None => required(out, child(&point_path, "center"), messages::REQUIRED_CENTER),
                    Some(center) => {
                        let center_path = child(&point_path, "center");
                        check_coordinate(
                            out,
                            child(&center_path, "latitude"),
                            &center.latitude,
                            messages::REQUIRED_LATITUDE,
                        );
                        check_coordinate(
                            out,
                            child(&center_path, "longitude"),
                            &center.longitude,
                            messages::REQUIRED_LONGITUDE,
                        );
                    }
                }
            }
        }
        LocationShape::Region => {
            if let Some(polygon) = &location.region {
                if polygon.exterior.len() < 3 {
                    out.push(Violation::new(
                        child(path, "region.exterior"),
                        ViolationKind::InvalidValue,
                        messages::INVALID_POLYGON,
                    ));
                }
            }
        }
    }

    // Confidence qualifies a region; it has no meaning for a point.
    if location.confidence.is_some() && location.region.is_none() {
        out.push(Violation::new(
            child(path, "confidence"),
            ViolationKind::InvalidValue,
            messages::INVALID_CONFIDENCE,
        ));
    }
}

pub(crate) fn validate_vcard(out: &mut Vec<Violation>, path: &str, vcard: &Vcard) {
    if is_blank(&vcard.full_name) {
        required(out, child(path, "fn"), messages::REQUIRED_FULL_NAME);
    }
}

pub(crate) fn validate_device_owner(out: &mut Vec<Violation>, path: &str, owner: &DeviceOwner) {
    match &owner.owner {
        None => required(out, child(path, "owner"), messages::REQUIRED_OWNER),
        Some(vcard) => validate_vcard(out, &child(path, "owner"), vcard),
    }
    if let Some(operator) = &owner.operator {
        validate_vcard(out, &child(path, "operator"), operator);
    }
}

pub(crate) fn validate_antenna(
    out: &mut Vec<Violation>,
    path: &str,
    antenna: &AntennaCharacteristics,
) {
    if let Some(height_type) = &antenna.height_type {
        if height_type != "AGL" && height_type != "AMSL" {
            out.push(Violation::new(
                child(path, "heightType"),
                ViolationKind::InvalidValue,
                messages::INVALID_HEIGHT_TYPE,
            ));
        }
    }
}

pub(crate) fn validate_frequency_range(
    out: &mut Vec<Violation>,
    path: &str,
    range: &FrequencyRange,
) {
    if range.start_hz.is_none() {
        required(out, child(path, "startHz"), messages::REQUIRED_START_HZ);
    }
    if range.stop_hz.is_none() {
        required(out, child(path, "stopHz"), messages::REQUIRED_STOP_HZ);
    }
    if let (Some(start), Some(stop)) = (range.start_hz, range.stop_hz) {
        if start >= stop {
            out.push(Violation::new(
                path,
                ViolationKind::InvalidValue,
                messages::INVALID_FREQUENCY_RANGE,
            ));
        }
    }
}

pub(crate) fn validate_capabilities(
    out: &mut Vec<Violation>,
    path: &str,
    capabilities: &DeviceCapabilities,
) {
    let ranges_path = child(path, "frequencyRanges");
    for (i, range) in capabilities.frequency_ranges.iter().enumerate() {
        validate_frequency_range(out, &indexed(&ranges_path, i), range);
    }
}

pub(crate) fn validate_event_time(out: &mut Vec<Violation>, path: &str, event: &EventTime) {
    if event.start_time.is_none() {
        required(out, child(path, "startTime"), messages::REQUIRED_START_TIME);
    }
    if event.stop_time.is_none() {
        required(out, child(path, "stopTime"), messages::REQUIRED_STOP_TIME);
    }
    if let (Some(start), Some(stop)) = (event.start_time, event.stop_time) {
        if start >= stop {
            out.push(Violation::new(
                path,
                ViolationKind::InvalidValue,
                messages::INVALID_TIME_ORDER,
            ));
        }
    }
    if let Some(recurrence) = &event.recurrence {
        let recurrence_path = child(path, "recurrence");
        match (recurrence.count, &recurrence.until) {
            (Some(_), Some(_)) => out.push(Violation::new(
                recurrence_path,
                ViolationKind::MutuallyExclusive,
                messages::EXCLUSIVE_COUNT_UNTIL,
            )),
            (None, None) => out.push(Violation::new(
                recurrence_path,
                ViolationKind::Required,
                messages::EXCLUSIVE_COUNT_UNTIL,
            )),
            _ => {}
        }
    }
}

pub(crate) fn validate_spectrum(out: &mut Vec<Violation>, path: &str, spectrum: &Spectrum) {
    if spectrum.resolution_bw_hz.is_none() {
        required(
            out,
            child(path, "resolutionBwHz"),
            messages::REQUIRED_RESOLUTION_BW,
        );
    }
    if spectrum.profiles.is_empty() && spectrum.frequency_ranges.is_empty() {
        required(out, child(path, "profiles"), messages::REQUIRED_PROFILES);
    }
    for (i, profile) in spectrum.profiles.iter().enumerate() {
        let profile_path = indexed(&child(path, "profiles"), i);
        for (j, point) in profile.points.iter().enumerate() {
            let point_path = indexed(&profile_path, j);
            if point.hz.is_none() {
                required(out, child(&point_path, "hz"), messages::REQUIRED_HZ);
            }
            if point.dbm.is_none() {
                required(out, child(&point_path, "dbm"), messages::REQUIRED_DBM);
            }
        }
    }
    for (i, range) in spectrum.frequency_ranges.iter().enumerate() {
        validate_frequency_range(out, &indexed(&child(path, "frequencyRanges"), i), range);
    }
}

fn validate_incumbent(out: &mut Vec<Violation>, incumbent: &Incumbent) {
    if is_blank(&incumbent.incumbent_type) {
        required(out, "incumbentType", messages::REQUIRED_INCUMBENT_TYPE);
    }
    match &incumbent.registrant {
        None => required(out, "registrant", messages::REQUIRED_REGISTRANT),
        Some(vcard) => validate_vcard(out, "registrant", vcard),
    }
    if let Some(contact) = &incumbent.contact {
        validate_vcard(out, "contact", contact);
    }
    match &incumbent.transmit_location {
        None => required(out, "transmitLocation", messages::REQUIRED_TRANSMIT_LOCATION),
        Some(location) => validate_geolocation(out, "transmitLocation", location),
    }
    match &incumbent.event {
        None => required(out, "event", messages::REQUIRED_EVENT),
        Some(event) => validate_event_time(out, "event", event),
    }

    // MVPD registrations protect a receive site.
    let is_mvpd = incumbent
        .incumbent_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("mvpd"));
    match &incumbent.receive_location {
        None if is_mvpd => {
            required(out, "receiveLocation", messages::REQUIRED_RECEIVE_LOCATION)
        }
        Some(location) => validate_geolocation(out, "receiveLocation", location),
        None => {}
    }
}

// ============================================================================
// Per-method validation
// ============================================================================

impl InitRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.device_desc {
            None => required(&mut out, "deviceDesc", messages::REQUIRED_DEVICE_DESC),
            Some(desc) => validate_device_descriptor(&mut out, "deviceDesc", desc),
        }
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        out
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.device_desc {
            None => required(&mut out, "deviceDesc", messages::REQUIRED_DEVICE_DESC),
            Some(desc) => validate_device_descriptor(&mut out, "deviceDesc", desc),
        }
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        match &self.device_owner {
            None => required(&mut out, "deviceOwner", messages::REQUIRED_DEVICE_OWNER),
            Some(owner) => validate_device_owner(&mut out, "deviceOwner", owner),
        }
        if let Some(antenna) = &self.antenna {
            validate_antenna(&mut out, "antenna", antenna);
        }
        out
    }
}

impl AvailSpectrumRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.device_desc {
            None => required(&mut out, "deviceDesc", messages::REQUIRED_DEVICE_DESC),
            Some(desc) => validate_device_descriptor(&mut out, "deviceDesc", desc),
        }
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        if let Some(owner) = &self.owner {
            validate_device_owner(&mut out, "owner", owner);
        }
        if let Some(antenna) = &self.antenna {
            validate_antenna(&mut out, "antenna", antenna);
        }
        if let Some(capabilities) = &self.capabilities {
            validate_capabilities(&mut out, "capabilities", capabilities);
        }
        if let Some(desc) = &self.master_device_desc {
            validate_device_descriptor(&mut out, "masterDeviceDesc", desc);
        }
        if let Some(location) = &self.master_device_location {
            validate_geolocation(&mut out, "masterDeviceLocation", location);
        }
        out
    }
}

impl AvailSpectrumBatchRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.device_desc {
            None => required(&mut out, "deviceDesc", messages::REQUIRED_DEVICE_DESC),
            Some(desc) => validate_device_descriptor(&mut out, "deviceDesc", desc),
        }
        if self.locations.is_empty() {
            required(&mut out, "locations", messages::REQUIRED_LOCATION);
        }
        for (i, location) in self.locations.iter().enumerate() {
            validate_geolocation(&mut out, &indexed("locations", i), location);
        }
        if let Some(owner) = &self.owner {
            validate_device_owner(&mut out, "owner", owner);
        }
        if let Some(antenna) = &self.antenna {
            validate_antenna(&mut out, "antenna", antenna);
        }
        if let Some(capabilities) = &self.capabilities {
            validate_capabilities(&mut out, "capabilities", capabilities);
        }
        if let Some(desc) = &self.master_device_desc {
            validate_device_descriptor(&mut out, "masterDeviceDesc", desc);
        }
        if let Some(location) = &self.master_device_location {
            validate_geolocation(&mut out, "masterDeviceLocation", location);
        }
        out
    }
}

impl NotifyRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.device_desc {
            None => required(&mut out, "deviceDesc", messages::REQUIRED_DEVICE_DESC),
            Some(desc) => validate_device_descriptor(&mut out, "deviceDesc", desc),
        }
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        if self.spectra.is_empty() {
            required(&mut out, "spectra", messages::REQUIRED_SPECTRA);
        }
        for (i, spectrum) in self.spectra.iter().enumerate() {
            validate_spectrum(&mut out, &indexed("spectra", i), spectrum);
        }
        if let Some(desc) = &self.master_device_desc {
            validate_device_descriptor(&mut out, "masterDeviceDesc", desc);
        }
        if let Some(location) = &self.master_device_location {
            validate_geolocation(&mut out, "masterDeviceLocation", location);
        }
        out
    }
}

impl VerifyDeviceRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if self.device_descs.is_empty() {
            required(&mut out, "deviceDescs", messages::REQUIRED_DEVICE_DESCS);
        }
        for (i, desc) in self.device_descs.iter().enumerate() {
            validate_device_descriptor(&mut out, &indexed("deviceDescs", i), desc);
        }
        if let Some(desc) = &self.master_device_desc {
            validate_device_descriptor(&mut out, "masterDeviceDesc", desc);
        }
        out
    }
}

impl InterferenceQueryRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        if self.start_time.is_none() {
            required(&mut out, "startTime", messages::REQUIRED_START_TIME);
        }
        if self.end_time.is_none() {
            required(&mut out, "endTime", messages::REQUIRED_END_TIME);
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if start >= end {
                out.push(Violation::new(
                    "startTime",
                    ViolationKind::InvalidValue,
                    messages::INVALID_QUERY_TIME_ORDER,
                ));
            }
        }
        if let Some(desc) = &self.device_desc {
            validate_device_descriptor(&mut out, "deviceDesc", desc);
        }
        if let Some(requestor) = &self.requestor {
            validate_vcard(&mut out, "requestor", requestor);
        }
        out
    }
}

impl AddIncumbentRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        validate_incumbent(&mut out, &self.incumbent);
        out
    }
}

impl RemoveIncumbentsRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if is_blank(&self.incumbent_type) {
            required(&mut out, "incumbentType", messages::REQUIRED_INCUMBENT_TYPE);
        }
        if is_blank(&self.serial_number) && self.transmit_location.is_none() {
            required(&mut out, "serialNumber", messages::REQUIRED_REMOVE_TARGET);
        }
        if let Some(location) = &self.transmit_location {
            validate_geolocation(&mut out, "transmitLocation", location);
        }
        if let Some(event) = &self.event {
            validate_event_time(&mut out, "event", event);
        }
        out
    }
}

impl GetIncumbentsRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if is_blank(&self.incumbent_type) {
            required(&mut out, "incumbentType", messages::REQUIRED_INCUMBENT_TYPE);
        }
        if let Some(location) = &self.location {
            validate_geolocation(&mut out, "location", location);
        }
        out
    }
}

impl GetChannelListRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        if let Some(desc) = &self.device_desc {
            validate_device_descriptor(&mut out, "deviceDesc", desc);
        }
        out
    }
}

impl GetDeviceListRequest {
    pub fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        match &self.location {
            None => required(&mut out, "location", messages::REQUIRED_LOCATION),
            Some(location) => validate_geolocation(&mut out, "location", location),
        }
        out
    }
}

impl PawsRequest {
    /// Runs the method's rule set, collecting every violation.
    pub fn validate(&self) -> Vec<Violation> {
        match self {
            PawsRequest::Init(r) => r.validate(),
            PawsRequest::Register(r) => r.validate(),
            PawsRequest::AvailSpectrum(r) => r.validate(),
            PawsRequest::AvailSpectrumBatch(r) => r.validate(),
            PawsRequest::Notify(r) => r.validate(),
            PawsRequest::VerifyDevice(r) => r.validate(),
            PawsRequest::InterferenceQuery(r) => r.validate(),
            PawsRequest::AddIncumbent(r) => r.validate(),
            PawsRequest::RemoveIncumbents(r) => r.validate(),
            PawsRequest::GetIncumbents(r) => r.validate(),
            PawsRequest::GetChannelList(r) => r.validate(),
            PawsRequest::GetDeviceList(r) => r.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawsdb_protocol::{FromJson, Method, RequestParams};
    use serde_json::json;

    fn register_request(params: serde_json::Value) -> RegisterRequest {
        let params = RequestParams::from_json(&params).unwrap();
        match PawsRequest::project(Method::Register, params) {
            PawsRequest::Register(r) => r,
            other => panic!("wrong variant: {other:?}"),
        }
    }

    fn complete_register() -> serde_json::Value {
        json!({
            "deviceDesc": {"serialNumber": "SN-0001", "fccId": "ABC-9000"},
            "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
            "deviceOwner": {"owner": {"fn": "Acme"}}
        })
    }

    #[test]
    fn test_complete_register_is_valid() {
        let request = register_request(complete_register());
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_register_missing_device_owner_is_one_violation() {
        let mut params = complete_register();
        params.as_object_mut().unwrap().remove("deviceOwner");
        let request = register_request(params);

        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "deviceOwner");
        assert_eq!(violations[0].kind, ViolationKind::Required);
        assert_eq!(violations[0].message, messages::REQUIRED_DEVICE_OWNER);
    }

    #[test]
    fn test_validation_is_exhaustive() {
        // Empty register request: every top-level required rule fires at once
        let request = RegisterRequest::default();
        let violations = request.validate();
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["deviceDesc", "location", "deviceOwner"]);
    }

    #[test]
    fn test_serial_number_length_boundary() {
        let at_limit = "x".repeat(64);
        let mut out = Vec::new();
        validate_device_descriptor(
            &mut out,
            "deviceDesc",
            &DeviceDescriptor {
                serial_number: Some(at_limit),
                ..Default::default()
            },
        );
        assert!(out.is_empty());

        let over_limit = "x".repeat(65);
        let mut out = Vec::new();
        validate_device_descriptor(
            &mut out,
            "deviceDesc",
            &DeviceDescriptor {
                serial_number: Some(over_limit),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::Length);
        assert_eq!(out[0].message, messages::LENGTH_SERIAL_NUMBER);
    }

    #[test]
    fn test_fcc_id_length_bounds() {
        for (fcc_id, valid) in [("ABCD", false), ("ABCDE", true), ("A".repeat(19).as_str(), true), ("A".repeat(20).as_str(), false)] {
            let mut out = Vec::new();
            validate_device_descriptor(
                &mut out,
                "deviceDesc",
                &DeviceDescriptor {
                    serial_number: Some("SN".to_string()),
                    fcc_id: Some(fcc_id.to_string()),
                    ..Default::default()
                },
            );
            assert_eq!(out.is_empty(), valid, "fccId: {fcc_id:?}");
        }
    }

    #[test]
    fn test_geolocation_mutual_exclusion() {
        let location = GeoLocation::from_json(&json!({
            "point": {"center": {"latitude": "1", "longitude": "2"}},
            "region": {"exterior": [
                {"latitude": "0", "longitude": "0"},
                {"latitude": "0", "longitude": "1"},
                {"latitude": "1", "longitude": "1"}
            ]}
        }))
        .unwrap();

        let mut out = Vec::new();
        validate_geolocation(&mut out, "location", &location);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::MutuallyExclusive);
        assert_eq!(out[0].message, messages::EXCLUSIVE_POINT_REGION);
    }

    #[test]
    fn test_geolocation_neither_is_required() {
        let mut out = Vec::new();
        validate_geolocation(&mut out, "location", &GeoLocation::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::Required);
        assert_eq!(out[0].message, messages::REQUIRED_LOCATION);
    }

    #[test]
    fn test_confidence_without_region() {
        let location = GeoLocation::from_json(&json!({
            "point": {"center": {"latitude": "1", "longitude": "2"}},
            "confidence": 95
        }))
        .unwrap();

        let mut out = Vec::new();
        validate_geolocation(&mut out, "location", &location);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].field, "location.confidence");
        assert_eq!(out[0].message, messages::INVALID_CONFIDENCE);
    }

    #[test]
    fn test_fcc_etsi_mutual_exclusion() {
        let mut out = Vec::new();
        validate_device_descriptor(
            &mut out,
            "deviceDesc",
            &DeviceDescriptor {
                serial_number: Some("SN".to_string()),
                fcc_id: Some("ABC-9000".to_string()),
                etsi_en_device_type: Some("A".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::MutuallyExclusive);
        assert_eq!(out[0].message, messages::EXCLUSIVE_FCC_ETSI);
    }

    #[test]
    fn test_etsi_device_category_values() {
        for (category, valid) in [("master", true), ("Slave", true), ("relay", false)] {
            let mut out = Vec::new();
            validate_device_descriptor(
                &mut out,
                "deviceDesc",
                &DeviceDescriptor {
                    serial_number: Some("SN".to_string()),
                    etsi_device_category: Some(category.to_string()),
                    ..Default::default()
                },
            );
            assert_eq!(out.is_empty(), valid, "category: {category:?}");
        }
    }

    #[test]
    fn test_event_time_ordering() {
        let event = EventTime::from_json(&json!({
            "startTime": "2026-03-02T00:00:00Z",
            "stopTime": "2026-03-01T00:00:00Z"
        }))
        .unwrap();

        let mut out = Vec::new();
        validate_event_time(&mut out, "event", &event);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, messages::INVALID_TIME_ORDER);
    }

    #[test]
    fn test_recurrence_count_until_exclusivity() {
        // Both set
        let event = EventTime::from_json(&json!({
            "startTime": "2026-03-01T00:00:00Z",
            "stopTime": "2026-03-02T00:00:00Z",
            "recurrence": {"count": 3, "until": "2026-06-01T00:00:00Z"}
        }))
        .unwrap();
        let mut out = Vec::new();
        validate_event_time(&mut out, "event", &event);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::MutuallyExclusive);

        // Neither set
        let event = EventTime::from_json(&json!({
            "startTime": "2026-03-01T00:00:00Z",
            "stopTime": "2026-03-02T00:00:00Z",
            "recurrence": {"frequency": "DAILY"}
        }))
        .unwrap();
        let mut out = Vec::new();
        validate_event_time(&mut out, "event", &event);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ViolationKind::Required);

        // Exactly one set
        let event = EventTime::from_json(&json!({
            "startTime": "2026-03-01T00:00:00Z",
            "stopTime": "2026-03-02T00:00:00Z",
            "recurrence": {"count": 3}
        }))
        .unwrap();
        let mut out = Vec::new();
        validate_event_time(&mut out, "event", &event);
        assert!(out.is_empty());
    }

    #[test]
    fn test_notify_requires_spectra() {
        let params = RequestParams::from_json(&json!({
            "deviceDesc": {"serialNumber": "SN-1"},
            "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}}
        }))
        .unwrap();
        let request = PawsRequest::project(Method::NotifySpectrumUse, params);

        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "spectra");
        assert_eq!(violations[0].message, messages::REQUIRED_SPECTRA);
    }

    #[test]
    fn test_batch_locations_validated_independently() {
        let params = RequestParams::from_json(&json!({
            "deviceDesc": {"serialNumber": "SN-1"},
            "locations": [
                {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
                {"confidence": 50}
            ]
        }))
        .unwrap();
        let request = PawsRequest::project(Method::GetSpectrumBatch, params);

        let violations = request.validate();
        // The second location is neither point nor region, and carries a
        // confidence without a region
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["locations[1]", "locations[1].confidence"]);
    }

    #[test]
    fn test_interference_query_time_range() {
        let params = RequestParams::from_json(&json!({
            "location": {"point": {"center": {"latitude": "47.6", "longitude": "-122.3"}}},
            "startTime": "2026-03-02T00:00:00Z",
            "endTime": "2026-03-01T00:00:00Z"
        }))
        .unwrap();
        let request = PawsRequest::project(Method::InterferenceQuery, params);

        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, messages::INVALID_QUERY_TIME_ORDER);
    }

    #[test]
    fn test_mvpd_incumbent_requires_receive_location() {
        let params = RequestParams::from_json(&json!({
            "incumbentType": "MVPD",
            "registrant": {"fn": "Cable Co."},
            "transmitLocation": {"point": {"center": {"latitude": "40.0", "longitude": "-105.0"}}},
            "event": {"startTime": "2026-03-01T00:00:00Z", "stopTime": "2026-09-01T00:00:00Z"}
        }))
        .unwrap();
        let request = PawsRequest::project(Method::AddIncumbent, params);

        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "receiveLocation");
        assert_eq!(violations[0].message, messages::REQUIRED_RECEIVE_LOCATION);
    }

    #[test]
    fn test_lpaux_incumbent_does_not_require_receive_location() {
        let params = RequestParams::from_json(&json!({
            "incumbentType": "LPAux",
            "registrant": {"fn": "Stage Mics Inc."},
            "transmitLocation": {"point": {"center": {"latitude": "40.0", "longitude": "-105.0"}}},
            "event": {"startTime": "2026-03-01T00:00:00Z", "stopTime": "2026-03-02T00:00:00Z"}
        }))
        .unwrap();
        let request = PawsRequest::project(Method::AddIncumbent, params);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_remove_incumbents_needs_a_target() {
        let params = RequestParams::from_json(&json!({"incumbentType": "LPAux"})).unwrap();
        let request = PawsRequest::project(Method::RemoveIncumbents, params);

        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, messages::REQUIRED_REMOVE_TARGET);
    }

    #[test]
    fn test_verify_device_requires_descriptors() {
        let request = VerifyDeviceRequest::default();
        let violations = request.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "deviceDescs");
    }

    #[test]
    fn test_violation_error_codes() {
        let required = Violation::new("x", ViolationKind::Required, messages::REQUIRED_LOCATION);
        assert_eq!(required.error_code(), ErrorCode::Missing);

        let invalid = Violation::new("x", ViolationKind::InvalidValue, messages::INVALID_CONFIDENCE);
        assert_eq!(invalid.error_code(), ErrorCode::InvalidValue);
    }
}
