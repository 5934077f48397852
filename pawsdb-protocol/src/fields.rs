//! Fixed wire field vocabulary.
//!
//! These names are part of the protocol contract and must not change.
//! Every codec dispatches on them; anything outside this vocabulary goes to
//! the unknown-field overflow map.

// Shared across methods
pub const TYPE: &str = "type";
pub const VERSION: &str = "version";
pub const DEVICE_DESC: &str = "deviceDesc";
pub const DEVICE_DESCS: &str = "deviceDescs";
pub const MASTER_DEVICE_DESC: &str = "masterDeviceDesc";
pub const LOCATION: &str = "location";
pub const LOCATIONS: &str = "locations";
pub const MASTER_DEVICE_LOCATION: &str = "masterDeviceLocation";
pub const DEVICE_OWNER: &str = "deviceOwner";
pub const OWNER: &str = "owner";
pub const OPERATOR: &str = "operator";
pub const ANTENNA: &str = "antenna";
pub const CAPABILITIES: &str = "capabilities";
pub const REQUEST_TYPE: &str = "requestType";
pub const SPECTRA: &str = "spectra";

// Geolocation
pub const POINT: &str = "point";
pub const REGION: &str = "region";
pub const CONFIDENCE: &str = "confidence";
pub const CENTER: &str = "center";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const SEMI_MAJOR_AXIS: &str = "semiMajorAxis";
pub const SEMI_MINOR_AXIS: &str = "semiMinorAxis";
pub const ORIENTATION: &str = "orientation";
pub const EXTERIOR: &str = "exterior";

// Device descriptor
pub const SERIAL_NUMBER: &str = "serialNumber";
pub const MANUFACTURER_ID: &str = "manufacturerId";
pub const MODEL_ID: &str = "modelId";
pub const FCC_ID: &str = "fccId";
pub const FCC_TVBD_DEVICE_TYPE: &str = "fccTvbdDeviceType";
pub const ETSI_EN_DEVICE_TYPE: &str = "etsiEnDeviceType";
pub const ETSI_DEVICE_CATEGORY: &str = "etsiDeviceCategory";
pub const ETSI_EN_TECHNOLOGY_ID: &str = "etsiEnTechnologyId";
pub const ETSI_EN_DEVICE_EMISSIONS_CLASS: &str = "etsiEnDeviceEmissionsClass";
pub const RULESET_IDS: &str = "rulesetIds";

// Antenna and capabilities
pub const HEIGHT: &str = "height";
pub const HEIGHT_TYPE: &str = "heightType";
pub const HEIGHT_UNCERTAINTY: &str = "heightUncertainty";
pub const FREQUENCY_RANGES: &str = "frequencyRanges";

// VCard
pub const FULL_NAME: &str = "fn";
pub const ORG: &str = "org";
pub const ADR: &str = "adr";
pub const TEL: &str = "tel";
pub const EMAIL: &str = "email";
pub const TEXT: &str = "text";
pub const URI: &str = "uri";
pub const STREET: &str = "street";
pub const LOCALITY: &str = "locality";
pub const CODE: &str = "code";
pub const COUNTRY: &str = "country";

// Spectrum family
pub const RESOLUTION_BW_HZ: &str = "resolutionBwHz";
pub const PROFILES: &str = "profiles";
pub const HZ: &str = "hz";
pub const DBM: &str = "dbm";
pub const START_HZ: &str = "startHz";
pub const STOP_HZ: &str = "stopHz";
pub const CHANNEL_ID: &str = "channelId";
pub const MAX_POWER_DBM: &str = "maxPowerDBm";
pub const EVENT_TIME: &str = "eventTime";
pub const SPECTRUM_SCHEDULES: &str = "spectrumSchedules";
pub const RULESET_INFO: &str = "rulesetInfo";
pub const MAX_TOTAL_BW_HZ: &str = "maxTotalBwHz";
pub const MAX_CONTIGUOUS_BW_HZ: &str = "maxContiguousBwHz";
pub const AUTHORITY: &str = "authority";
pub const RULESET_ID: &str = "rulesetId";
pub const MAX_LOCATION_CHANGE: &str = "maxLocationChange";
pub const MAX_POLLING_SECS: &str = "maxPollingSecs";

// Event times
pub const START_TIME: &str = "startTime";
pub const STOP_TIME: &str = "stopTime";
pub const END_TIME: &str = "endTime";
pub const RECURRENCE: &str = "recurrence";
pub const FREQUENCY: &str = "frequency";
pub const INTERVAL: &str = "interval";
pub const COUNT: &str = "count";
pub const UNTIL: &str = "until";

// Region management
pub const INCUMBENT_TYPE: &str = "incumbentType";
pub const REGISTRANT: &str = "registrant";
pub const CONTACT: &str = "contact";
pub const REQUESTOR: &str = "requestor";
pub const TRANSMIT_LOCATION: &str = "transmitLocation";
pub const RECEIVE_LOCATION: &str = "receiveLocation";
pub const EVENT: &str = "event";
pub const TV_SPECTRUM: &str = "tvSpectrum";
pub const CHANNEL: &str = "channel";
pub const FREQUENCY_HZ: &str = "frequencyHz";

// Result fields
pub const TIMESTAMP: &str = "timestamp";
pub const RULESET_INFOS: &str = "rulesetInfos";
pub const DATABASE_CHANGE: &str = "databaseChange";
pub const DATABASES: &str = "databases";
pub const NAME: &str = "name";
pub const SPECTRUM_SPECS: &str = "spectrumSpecs";
pub const DEVICE_VALIDITIES: &str = "deviceValidities";
pub const IS_VALID: &str = "isValid";
pub const REASON: &str = "reason";
pub const CHANNELS: &str = "channels";
pub const INCUMBENTS: &str = "incumbents";
pub const DEVICES: &str = "devices";
pub const DEVICE_COUNT: &str = "deviceCount";
pub const MESSAGE: &str = "message";
