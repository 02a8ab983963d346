use async_trait::async_trait;
use reqwest::Client;

use crate::analyst::VisionModel;
use crate::error::{InvoiceInsightError, Result};
use crate::gemini::types::*;
use crate::upload::UploadedImage;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub(crate) async fn generate_content(&self, contents: Vec<Content>) -> Result<String> {
        // The key travels as a header, never in the URL, so error text that
        // echoes the URL cannot leak it.
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let payload = GenerateContentRequest { contents };

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(InvoiceInsightError::Inference(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;

        let part = body
            .candidates
            .ok_or_else(|| InvoiceInsightError::Inference("No candidates returned".to_string()))?
            .first()
            .ok_or_else(|| InvoiceInsightError::Inference("Empty candidates list".to_string()))?
            .content
            .parts
            .first()
            .ok_or_else(|| InvoiceInsightError::Inference("No parts in content".to_string()))?
            .clone();

        match part {
            Part::Text { text } => Ok(text),
            _ => Err(InvoiceInsightError::Inference(
                "Model returned non-text content".to_string(),
            )),
        }
    }
}

#[async_trait]
impl VisionModel for GeminiClient {
    /// One user turn holding instruction, inline image, then question. The
    /// instruction rides as an ordinary text part rather than a
    /// `systemInstruction` block.
    async fn generate(
        &self,
        instruction: &str,
        image: &UploadedImage,
        question: &str,
    ) -> Result<String> {
        let contents = vec![Content::user(vec![
            Part::text(instruction),
            Part::inline_image(image.mime_type(), image.bytes()),
            Part::text(question),
        ])];

        self.generate_content(contents).await
    }
}
