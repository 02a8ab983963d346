use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{InvoiceInsightError, Result};
use crate::upload::UploadedImage;

/// Body of `POST /api/ask`. The image is optional so the server, not the
/// page, decides what a submit without an upload means.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    pub image: Option<ImagePayload>,
}

/// An uploaded image as the page sends it: declared MIME type plus
/// base64-encoded bytes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    /// Decodes the transport form back into a validated upload.
    pub fn decode(&self) -> Result<UploadedImage> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| {
                InvoiceInsightError::UnsupportedImage(format!("Invalid base64 image data: {}", e))
            })?;
        UploadedImage::new(&self.mime_type, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_payload_decodes_to_a_validated_upload() {
        let payload = ImagePayload {
            mime_type: "image/jpeg".to_string(),
            data: base64::engine::general_purpose::STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0]),
        };

        let image = payload.decode().unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.bytes(), &[0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn malformed_base64_is_an_unsupported_image() {
        let payload = ImagePayload {
            mime_type: "image/png".to_string(),
            data: "not base64 at all!".to_string(),
        };

        let err = payload.decode().unwrap_err();
        assert!(matches!(err, InvoiceInsightError::UnsupportedImage(_)));
    }

    #[test]
    fn question_defaults_to_empty_when_absent() {
        let request: AskRequest = serde_json::from_str(r#"{ "image": null }"#).unwrap();
        assert_eq!(request.question, "");
        assert!(request.image.is_none());
    }
}
