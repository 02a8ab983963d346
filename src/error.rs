use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceInsightError {
    /// Submit attempted before an invoice image was selected.
    #[error("No invoice image uploaded")]
    MissingInput,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported image upload: {0}")]
    UnsupportedImage(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl From<reqwest::Error> for InvoiceInsightError {
    // Transport failures count as failed remote calls. The message ends up
    // in the browser, so the request URL is stripped from it.
    fn from(err: reqwest::Error) -> Self {
        InvoiceInsightError::Inference(err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, InvoiceInsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_readable() {
        assert_eq!(
            InvoiceInsightError::MissingInput.to_string(),
            "No invoice image uploaded"
        );
        assert_eq!(
            InvoiceInsightError::Inference("quota exceeded".to_string()).to_string(),
            "Inference failed: quota exceeded"
        );
        assert_eq!(
            InvoiceInsightError::Configuration("GOOGLE_API_KEY is not set".to_string())
                .to_string(),
            "Configuration error: GOOGLE_API_KEY is not set"
        );
    }
}
