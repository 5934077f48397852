//! JSON-RPC-shaped request and response envelopes.
//!
//! The envelope decoder handles the outer `{jsonrpc, id, method, params}` /
//! `{jsonrpc, id, result|error}` wrapper; the body decodes through the
//! generic containers, not per method. Method dispatch happens after
//! decoding. Unknown top-level fields are retained, never rejected.

use crate::container::{RequestParams, ResultFields};
use crate::decode::{FromJson, UnknownFieldPolicy};
use crate::error::{ErrorCode, ProtocolError};
use crate::JSONRPC_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// The fixed method set. Wire names are the `method` strings clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "spectrum.paws.init")]
    Init,
    #[serde(rename = "spectrum.paws.register")]
    Register,
    #[serde(rename = "spectrum.paws.getSpectrum")]
    GetSpectrum,
    #[serde(rename = "spectrum.paws.getSpectrumBatch")]
    GetSpectrumBatch,
    #[serde(rename = "spectrum.paws.notifySpectrumUse")]
    NotifySpectrumUse,
    #[serde(rename = "spectrum.paws.verifyDevice")]
    VerifyDevice,
    #[serde(rename = "spectrum.paws.interferenceQuery")]
    InterferenceQuery,
    #[serde(rename = "regionManagement.addIncumbent")]
    AddIncumbent,
    #[serde(rename = "regionManagement.removeIncumbents")]
    RemoveIncumbents,
    #[serde(rename = "regionManagement.getIncumbents")]
    GetIncumbents,
    #[serde(rename = "regionManagement.getChannelList")]
    GetChannelList,
    #[serde(rename = "regionManagement.getDeviceList")]
    GetDeviceList,
}

impl Method {
    pub const ALL: [Method; 12] = [
        Method::Init,
        Method::Register,
        Method::GetSpectrum,
        Method::GetSpectrumBatch,
        Method::NotifySpectrumUse,
        Method::VerifyDevice,
        Method::InterferenceQuery,
        Method::AddIncumbent,
        Method::RemoveIncumbents,
        Method::GetIncumbents,
        Method::GetChannelList,
        Method::GetDeviceList,
    ];

    /// Resolves a wire method name. Unrecognized names are an explicit
    /// error, never silently ignored.
    pub fn from_name(name: &str) -> Result<Self, ProtocolError> {
        match name {
            "spectrum.paws.init" => Ok(Method::Init),
            "spectrum.paws.register" => Ok(Method::Register),
            "spectrum.paws.getSpectrum" => Ok(Method::GetSpectrum),
            "spectrum.paws.getSpectrumBatch" => Ok(Method::GetSpectrumBatch),
            "spectrum.paws.notifySpectrumUse" => Ok(Method::NotifySpectrumUse),
            "spectrum.paws.verifyDevice" => Ok(Method::VerifyDevice),
            "spectrum.paws.interferenceQuery" => Ok(Method::InterferenceQuery),
            "regionManagement.addIncumbent" => Ok(Method::AddIncumbent),
            "regionManagement.removeIncumbents" => Ok(Method::RemoveIncumbents),
            "regionManagement.getIncumbents" => Ok(Method::GetIncumbents),
            "regionManagement.getChannelList" => Ok(Method::GetChannelList),
            "regionManagement.getDeviceList" => Ok(Method::GetDeviceList),
            _ => Err(ProtocolError::UnknownMethod(name.to_string())),
        }
    }

    /// Returns the wire method name.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Init => "spectrum.paws.init",
            Method::Register => "spectrum.paws.register",
            Method::GetSpectrum => "spectrum.paws.getSpectrum",
            Method::GetSpectrumBatch => "spectrum.paws.getSpectrumBatch",
            Method::NotifySpectrumUse => "spectrum.paws.notifySpectrumUse",
            Method::VerifyDevice => "spectrum.paws.verifyDevice",
            Method::InterferenceQuery => "spectrum.paws.interferenceQuery",
            Method::AddIncumbent => "regionManagement.addIncumbent",
            Method::RemoveIncumbents => "regionManagement.removeIncumbents",
            Method::GetIncumbents => "regionManagement.getIncumbents",
            Method::GetChannelList => "regionManagement.getChannelList",
            Method::GetDeviceList => "regionManagement.getDeviceList",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_jsonrpc() -> String {
    JSONRPC_VERSION.to_string()
}

/// Request envelope: `{jsonrpc, id, method, params}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,

    /// Request ID, echoed verbatim in the response.
    #[serde(default)]
    pub id: String,

    /// Raw method name; resolve with [`RequestEnvelope::method`].
    #[serde(default)]
    pub method: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Unknown top-level fields, retained for forward compatibility.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl RequestEnvelope {
    pub fn new(id: impl Into<String>, method: Method) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            method: method.name().to_string(),
            params: None,
            extra: HashMap::new(),
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Parses an envelope from raw JSON. Malformed JSON is fatal: no
    /// container is constructed.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolves the method name against the fixed method set.
    pub fn method(&self) -> Result<Method, ProtocolError> {
        Method::from_name(&self.method)
    }

    /// Decodes the params body into the generic container. A missing params
    /// member decodes like an empty one; required fields surface as
    /// validation violations, not decode errors.
    pub fn decode_params(&self) -> Result<RequestParams, ProtocolError> {
        self.decode_params_with(UnknownFieldPolicy::default())
    }

    pub fn decode_params_with(
        &self,
        policy: UnknownFieldPolicy,
    ) -> Result<RequestParams, ProtocolError> {
        match &self.params {
            Some(value) => RequestParams::from_json_with(value, policy),
            None => Ok(RequestParams::default()),
        }
    }
}

/// Error member of a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable numeric code; see [`ErrorCode`].
    pub code: i32,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Resolves the numeric code back to the catalog, if it is a known one.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }
}

/// Response envelope: `{jsonrpc, id}` plus result or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,

    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,

    /// Unknown top-level fields, retained for forward compatibility.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ResponseEnvelope {
    pub fn ok(id: impl Into<String>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: Some(result),
            error: None,
            extra: HashMap::new(),
        }
    }

    pub fn error(id: impl Into<String>, error: ErrorBody) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.into(),
            result: None,
            error: Some(error),
            extra: HashMap::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes the result body into the generic container. A missing result
    /// member decodes like an empty one.
    pub fn decode_result(&self) -> Result<ResultFields, ProtocolError> {
        self.decode_result_with(UnknownFieldPolicy::default())
    }

    pub fn decode_result_with(
        &self,
        policy: UnknownFieldPolicy,
    ) -> Result<ResultFields, ProtocolError> {
        match &self.result {
            Some(value) => ResultFields::from_json_with(value, policy),
            None => Ok(ResultFields::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_names_roundtrip() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.name()).unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_method_is_explicit() {
        let err = Method::from_name("spectrum.paws.selfDestruct").unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownMethod(_)));
        assert!(err.to_string().contains("selfDestruct"));
    }

    #[test]
    fn test_request_envelope_decode() {
        let json = r#"{
            "jsonrpc": "2.0",
            "id": "req-1",
            "method": "spectrum.paws.init",
            "params": {"version": "1.0", "deviceDesc": {"serialNumber": "SN-1"}}
        }"#;
        let envelope = RequestEnvelope::from_json(json).unwrap();
        assert_eq!(envelope.id, "req-1");
        assert_eq!(envelope.method().unwrap(), Method::Init);

        let params = envelope.decode_params().unwrap();
        assert_eq!(params.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn test_unknown_top_level_fields_retained() {
        let json = r#"{"jsonrpc": "2.0", "id": "1", "method": "spectrum.paws.init", "vendor": "acme"}"#;
        let envelope = RequestEnvelope::from_json(json).unwrap();
        assert_eq!(envelope.extra.get("vendor"), Some(&json!("acme")));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let err = RequestEnvelope::from_json("{not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Json(_)));
    }

    #[test]
    fn test_missing_params_decodes_empty() {
        let json = r#"{"jsonrpc": "2.0", "id": "1", "method": "spectrum.paws.init"}"#;
        let envelope = RequestEnvelope::from_json(json).unwrap();
        let params = envelope.decode_params().unwrap();
        assert_eq!(params, RequestParams::default());
    }

    #[test]
    fn test_request_envelope_builder() {
        let envelope = RequestEnvelope::new("7", Method::GetSpectrum)
            .with_params(json!({"requestType": "GENERIC_SLAVE"}));
        let json = envelope.to_json().unwrap();
        assert!(json.contains(r#""method":"spectrum.paws.getSpectrum""#));
        assert!(json.contains(r#""jsonrpc":"2.0""#));
    }

    #[test]
    fn test_response_ok() {
        let response = ResponseEnvelope::ok("req-1", json!({"type": "INIT_RESP"}));
        assert!(response.is_ok());
        let result = response.decode_result().unwrap();
        assert_eq!(result.message_type.as_deref(), Some("INIT_RESP"));
    }

    #[test]
    fn test_response_error() {
        let body = ErrorBody::new(ErrorCode::Unauthorized, "device not authorized")
            .with_data("deviceDesc.fccId");
        let response = ResponseEnvelope::error("req-1", body);
        assert!(response.is_error());

        let json = response.to_json().unwrap();
        assert!(json.contains(r#""code":301"#));

        let parsed = ResponseEnvelope::from_json(&json).unwrap();
        let error = parsed.error.unwrap();
        assert_eq!(error.error_code(), Some(ErrorCode::Unauthorized));
        assert_eq!(error.data.as_deref(), Some("deviceDesc.fccId"));
    }

    #[test]
    fn test_method_serde_wire_names() {
        let json = serde_json::to_string(&Method::NotifySpectrumUse).unwrap();
        assert_eq!(json, "\"spectrum.paws.notifySpectrumUse\"");

        let parsed: Method = serde_json::from_str("\"regionManagement.addIncumbent\"").unwrap();
        assert_eq!(parsed, Method::AddIncumbent);
    }
}
