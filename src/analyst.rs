use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{InvoiceInsightError, Result};
use crate::prompts::SYSTEM_PROMPT_INVOICE_QA;
use crate::upload::UploadedImage;

/// The remote inference boundary: one generation call in, generated text out.
///
/// Production wires in [`GeminiClient`](crate::gemini::GeminiClient); tests
/// substitute a stub so no network traffic is involved. Swapping vendors
/// means implementing this trait, nothing else.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Issues exactly one generation call for the given triple.
    async fn generate(
        &self,
        instruction: &str,
        image: &UploadedImage,
        question: &str,
    ) -> Result<String>;
}

/// Stateless adapter between the submit action and the inference service.
pub struct InvoiceAnalyst {
    model: Arc<dyn VisionModel>,
    instruction: String,
}

impl InvoiceAnalyst {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self {
            model,
            instruction: SYSTEM_PROMPT_INVOICE_QA.to_string(),
        }
    }

    /// Swap in a different fixed instruction (e.g. for other document kinds).
    #[must_use]
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Ask a question about the currently uploaded invoice image.
    ///
    /// # Arguments
    /// * `image` - the upload from the current interaction, if any
    /// * `question` - the user's question (may be empty)
    ///
    /// Fails with [`InvoiceInsightError::MissingInput`] before any remote
    /// contact when no image is present; otherwise performs exactly one call
    /// on the backing model and returns its text unmodified. Nothing is
    /// retried and nothing is kept between calls.
    pub async fn ask(&self, image: Option<&UploadedImage>, question: &str) -> Result<String> {
        let image = image.ok_or(InvoiceInsightError::MissingInput)?;
        self.model
            .generate(&self.instruction, image, question)
            .await
    }
}
