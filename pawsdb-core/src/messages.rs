//! Fixed validation message catalog.
//!
//! These strings travel in error responses and are part of the wire
//! contract; keep them stable across versions.

// Required fields
pub const REQUIRED_DEVICE_DESC: &str = "DeviceDescriptor is Required";
pub const REQUIRED_LOCATION: &str = "Location is Required";
pub const REQUIRED_DEVICE_OWNER: &str = "DeviceOwner is Required";
pub const REQUIRED_OWNER: &str = "Owner is Required";
pub const REQUIRED_FULL_NAME: &str = "fn is Required";
pub const REQUIRED_SERIAL_NUMBER: &str = "SerialNumber is Required";
pub const REQUIRED_SPECTRA: &str = "Spectra is Required";
pub const REQUIRED_DEVICE_DESCS: &str = "DeviceDescriptors are Required";
pub const REQUIRED_START_TIME: &str = "StartTime is Required";
pub const REQUIRED_STOP_TIME: &str = "StopTime is Required";
pub const REQUIRED_END_TIME: &str = "EndTime is Required";
pub const REQUIRED_EVENT: &str = "Event is Required";
pub const REQUIRED_INCUMBENT_TYPE: &str = "IncumbentType is Required";
pub const REQUIRED_TRANSMIT_LOCATION: &str = "TransmitLocation is Required";
pub const REQUIRED_RECEIVE_LOCATION: &str = "ReceiveLocation is Required";
pub const REQUIRED_REGISTRANT: &str = "Registrant is Required";
pub const REQUIRED_REMOVE_TARGET: &str = "SerialNumber or TransmitLocation is Required";
pub const REQUIRED_CENTER: &str = "Center is Required";
pub const REQUIRED_LATITUDE: &str = "Latitude is Required";
pub const REQUIRED_LONGITUDE: &str = "Longitude is Required";
pub const REQUIRED_RESOLUTION_BW: &str = "ResolutionBwHz is Required";
pub const REQUIRED_PROFILES: &str = "Profiles or FrequencyRanges are Required";
pub const REQUIRED_HZ: &str = "Hz is Required";
pub const REQUIRED_DBM: &str = "Dbm is Required";
pub const REQUIRED_START_HZ: &str = "StartHz is Required";
pub const REQUIRED_STOP_HZ: &str = "StopHz is Required";

// Length bounds
pub const LENGTH_SERIAL_NUMBER: &str = "SerialNumber exceeds maximum length of 64";
pub const LENGTH_MANUFACTURER_ID: &str = "ManufacturerId exceeds maximum length of 64";
pub const LENGTH_MODEL_ID: &str = "ModelId exceeds maximum length of 64";
pub const LENGTH_FCC_ID: &str = "FccId must be between 5 and 19 characters";

// Mutual exclusion
pub const EXCLUSIVE_POINT_REGION: &str = "Point and Region are mutually exclusive";
pub const EXCLUSIVE_FCC_ETSI: &str = "FccId and Etsi device fields are mutually exclusive";
pub const EXCLUSIVE_COUNT_UNTIL: &str = "Recurrence requires exactly one of Count or Until";

// Invalid values
pub const INVALID_TIME_ORDER: &str = "StartTime must precede StopTime";
pub const INVALID_QUERY_TIME_ORDER: &str = "StartTime must precede EndTime";
pub const INVALID_CONFIDENCE: &str = "Confidence requires Region";
pub const INVALID_DEVICE_CATEGORY: &str = "EtsiDeviceCategory must be Master or Slave";
pub const INVALID_POLYGON: &str = "Region requires at least three exterior points";
pub const INVALID_COORDINATE: &str = "Latitude and Longitude must be decimal degrees";
pub const INVALID_HEIGHT_TYPE: &str = "HeightType must be AGL or AMSL";
pub const INVALID_FREQUENCY_RANGE: &str = "StartHz must precede StopHz";

// Error response summaries
pub const MSG_MISSING: &str = "Required parameter missing";
pub const MSG_INVALID: &str = "Parameter value invalid";
