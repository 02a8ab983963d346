//! Uploaded invoice images and the formats the tool accepts.

use crate::error::{InvoiceInsightError, Result};

/// MIME types the upload control accepts. Mirrors the page's allow-list.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// One selected file: its declared MIME type and raw bytes.
///
/// Scoped to a single interaction; a new selection builds a new value.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    mime_type: String,
    bytes: Vec<u8>,
}

impl UploadedImage {
    /// Validates and wraps an upload.
    ///
    /// The declared MIME type must be allow-listed and must agree with the
    /// payload's leading byte signature. The declared string is passed
    /// through unchanged on success; it is never rewritten to match the
    /// content ("image/jpg" is rejected, not coerced to "image/jpeg").
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let mime_type = mime_type.into();

        if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
            return Err(InvoiceInsightError::UnsupportedImage(format!(
                "type \"{}\" is not one of: {}",
                mime_type,
                ALLOWED_IMAGE_TYPES.join(", ")
            )));
        }

        if bytes.is_empty() {
            return Err(InvoiceInsightError::UnsupportedImage(
                "empty image payload".to_string(),
            ));
        }

        match sniff_mime(&bytes) {
            Some(detected) if detected == mime_type => Ok(Self { mime_type, bytes }),
            Some(detected) => Err(InvoiceInsightError::UnsupportedImage(format!(
                "declared type \"{mime_type}\" but the file content looks like {detected}"
            ))),
            None => Err(InvoiceInsightError::UnsupportedImage(
                "file content does not match any supported image format".to_string(),
            )),
        }
    }

    /// The MIME type as declared by the upload control.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Identifies JPEG/PNG payloads by their leading byte signature.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg_bytes() -> Vec<u8> {
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]
    }

    fn png_bytes() -> Vec<u8> {
        vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00]
    }

    #[test]
    fn sniffs_known_signatures() {
        assert_eq!(sniff_mime(&jpeg_bytes()), Some("image/jpeg"));
        assert_eq!(sniff_mime(&png_bytes()), Some("image/png"));
        assert_eq!(sniff_mime(b"GIF89a....."), None);
        assert_eq!(sniff_mime(b""), None);
    }

    #[test]
    fn accepts_matching_jpeg_and_png() {
        let jpeg = UploadedImage::new("image/jpeg", jpeg_bytes()).unwrap();
        assert_eq!(jpeg.mime_type(), "image/jpeg");
        assert_eq!(jpeg.bytes(), jpeg_bytes().as_slice());

        let png = UploadedImage::new("image/png", png_bytes()).unwrap();
        assert_eq!(png.mime_type(), "image/png");
    }

    #[test]
    fn rejects_types_outside_the_allow_list() {
        let err = UploadedImage::new("image/gif", b"GIF89a.....".to_vec()).unwrap_err();
        assert!(matches!(err, InvoiceInsightError::UnsupportedImage(_)));
        assert!(err.to_string().contains("image/gif"));
    }

    #[test]
    fn rejects_the_jpg_alias_rather_than_coercing_it() {
        // "image/jpg" is not a registered type; passing it through silently
        // renamed would be a coercion, so the allow-list turns it away.
        let err = UploadedImage::new("image/jpg", jpeg_bytes()).unwrap_err();
        assert!(matches!(err, InvoiceInsightError::UnsupportedImage(_)));
    }

    #[test]
    fn rejects_declared_type_contradicted_by_content() {
        let err = UploadedImage::new("image/png", jpeg_bytes()).unwrap_err();
        assert!(err.to_string().contains("image/jpeg"));
    }

    #[test]
    fn rejects_unrecognizable_content() {
        let err = UploadedImage::new("image/jpeg", b"not an image at all".to_vec()).unwrap_err();
        assert!(matches!(err, InvoiceInsightError::UnsupportedImage(_)));
    }

    #[test]
    fn rejects_empty_payloads() {
        let err = UploadedImage::new("image/png", Vec::new()).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
