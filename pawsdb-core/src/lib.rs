//! # pawsdb-core
//!
//! Request projection and validation for pawsdb.
//!
//! This crate provides:
//! - Per-method typed request projections over the generic parameter
//!   container
//! - The validation rule set with its fixed message catalog
//! - Typed response builders for the result container
//! - The decode → project → validate pipeline entry points
//!
//! The pipeline is synchronous and allocates fresh state per call; the
//! hosting layer may invoke it from any number of threads.

pub mod messages;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod validate;

pub use pipeline::{decode_request, process_request, DecodedRequest, Outcome};
pub use request::{
    AddIncumbentRequest, AvailSpectrumBatchRequest, AvailSpectrumRequest, GetChannelListRequest,
    GetDeviceListRequest, GetIncumbentsRequest, InitRequest, InterferenceQueryRequest,
    NotifyRequest, PawsRequest, RegisterRequest, RemoveIncumbentsRequest, VerifyDeviceRequest,
};
pub use response::{rejection_response, violations_response};
pub use validate::{Violation, ViolationKind};
