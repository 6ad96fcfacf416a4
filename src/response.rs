//! Telegraph response envelope and upload response parsing

use crate::codec;
use crate::error::{Result, TelegraphError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Uniform wrapper returned by every API method
///
/// `error` is set when `ok` is false; `result` is set when `ok` is true and
/// the method returns something.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Success flag
    pub ok: bool,
    /// Error message from server
    #[serde(default)]
    pub error: Option<String>,
    /// Raw result payload
    #[serde(default)]
    pub result: Option<Value>,
}

impl Envelope {
    /// Parse an envelope from raw response bytes
    ///
    /// Bytes that are not JSON, or an object without a boolean `ok`, are
    /// reported as [`TelegraphError::EnvelopeParse`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        codec::from_json_slice(bytes).map_err(|e| TelegraphError::EnvelopeParse(e.to_string()))
    }

    /// Check if the envelope reports success
    pub fn is_success(&self) -> bool {
        self.ok
    }

    /// Unwrap the envelope, decoding the payload with `decoder`
    ///
    /// Returns `Ok(None)` when the server sent no result.
    pub fn into_result_with<T, F>(self, decoder: F) -> Result<Option<T>>
    where
        F: FnOnce(Value) -> Result<T>,
    {
        if !self.ok {
            return Err(TelegraphError::Service {
                message: self.error.unwrap_or_default(),
            });
        }

        match self.result {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decoder(value).map(Some),
        }
    }

    /// Unwrap the envelope, deserializing the payload into `T`
    pub fn into_result<T: DeserializeOwned>(self) -> Result<Option<T>> {
        self.into_result_with(decode_payload)
    }
}

/// Decode raw response bytes into a typed payload
///
/// # Example
///
/// ```
/// use telegraph_rs::{response, PageViews};
///
/// let views: Option<PageViews> =
///     response::decode_envelope(br#"{"ok":true,"result":{"views":40}}"#).unwrap();
/// assert_eq!(views.map(|v| v.views), Some(40));
///
/// let err = response::decode_envelope::<PageViews>(br#"{"ok":false,"error":"PAGE_NOT_FOUND"}"#)
///     .unwrap_err();
/// assert_eq!(err.service_message(), Some("PAGE_NOT_FOUND"));
/// ```
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>> {
    Envelope::parse(bytes)?.into_result()
}

/// Decode raw response bytes with a custom payload decoder
pub fn decode_envelope_with<T, F>(bytes: &[u8], decoder: F) -> Result<Option<T>>
where
    F: FnOnce(Value) -> Result<T>,
{
    Envelope::parse(bytes)?.into_result_with(decoder)
}

/// Deserialize a result payload, reporting shape mismatches as decode errors
pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T> {
    T::deserialize(serde_stacker::Deserializer::new(value))
        .map_err(|e| TelegraphError::Decode(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct UploadedFile {
    src: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UploadResponse {
    Files(Vec<UploadedFile>),
    Failure { error: String },
}

/// Parse the response of the file upload endpoint
///
/// The upload endpoint does not use the envelope: success is an array of
/// `{"src": "/file/..."}` objects and failure is `{"error": "..."}`. The
/// returned paths keep the order of the uploaded files. Failure messages
/// are lower-cased.
pub fn parse_upload_response(bytes: &[u8]) -> Result<Vec<String>> {
    let response: UploadResponse = codec::from_json_slice(bytes)
        .map_err(|e| TelegraphError::EnvelopeParse(format!("upload response: {e}")))?;

    match response {
        UploadResponse::Files(files) => Ok(files.into_iter().map(|f| f.src).collect()),
        UploadResponse::Failure { error } => Err(TelegraphError::Service {
            message: error.to_lowercase(),
        }),
    }
}
