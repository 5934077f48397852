//! # pawsdb-protocol
//!
//! Wire protocol implementation for pawsdb (PAWS - Protocol to Access
//! White-Space database, RFC 7545 family).
//!
//! This crate provides:
//! - JSON-RPC-shaped request/response envelope types
//! - The polymorphic parameter/result containers shared by all methods
//! - Lenient tree-based codecs for every nested value type
//! - Error codes and protocol constants
//!
//! Decoding runs over already-parsed `serde_json::Value` trees: for each
//! property the codecs dispatch on the exact wire name, skip empty values,
//! and retain unrecognized properties for forward compatibility. Transport
//! and spectrum computation are out of scope.

pub mod container;
pub mod decode;
pub mod device;
pub mod envelope;
pub mod error;
pub mod event;
pub mod fields;
pub mod geo;
pub mod incumbent;
pub mod spectrum;
pub mod vcard;

pub use container::{RequestParams, ResultFields};
pub use decode::{FromJson, UnknownFieldPolicy, UnknownFields};
pub use device::{
    AntennaCharacteristics, DeviceCapabilities, DeviceDescriptor, DeviceOwner, RegulatoryRegime,
};
pub use envelope::{ErrorBody, Method, RequestEnvelope, ResponseEnvelope};
pub use error::{ErrorCode, ProtocolError};
pub use event::{EventTime, RecurrenceInterval};
pub use geo::{Ellipse, GeoLocation, LocationShape, Point, Polygon};
pub use incumbent::{ChannelInfo, DatabaseSpec, DbUpdateSpec, DeviceValidity, Incumbent, TvSpectrum};
pub use spectrum::{
    FrequencyRange, RulesetInfo, Spectrum, SpectrumProfile, SpectrumProfilePoint, SpectrumSchedule,
    SpectrumSpec,
};
pub use vcard::Vcard;

/// JSON-RPC version carried in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// PAWS protocol version supported by this implementation.
pub const PAWS_VERSION: &str = "1.0";
