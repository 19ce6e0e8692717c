//! Uploaded plant photos

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// An uploaded (possibly cropped) photo. The identifier never inspects the pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantImage {
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl PlantImage {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Parse a browser data URL such as `data:image/jpeg;base64,/9j/4AAQ...`
    pub fn from_data_url(url: &str) -> Result<Self, ParseError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ParseError::InvalidImage("missing data: prefix".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ParseError::InvalidImage("missing payload".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ParseError::InvalidImage("payload is not base64".to_string()))?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| ParseError::InvalidImage(e.to_string()))?;

        Ok(Self::new(mime_type, bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Guess a MIME type from a file extension
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}
