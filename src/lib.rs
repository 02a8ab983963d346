//! # Invoice Insight
//!
//! A single-page web tool for asking questions about invoice images in any
//! language. An uploaded image and a free-text question are packaged with a
//! fixed instruction into exactly one Gemini `generateContent` call, and the
//! model's text comes back verbatim.
//!
//! ## Core Concepts
//!
//! - **Upload**: A validated invoice image (JPEG or PNG, checked against its bytes)
//! - **Question**: Free text in any language; an empty question is still a valid ask
//! - **Instruction**: A compile-time invoice-expert preamble sent ahead of every question
//! - **Stateless**: Nothing is kept between interactions; every submit stands alone
//!
//! ## Example
//!
//! ```rust,ignore
//! use invoice_insight::*;
//! use std::sync::Arc;
//!
//! let client = GeminiClient::new(std::env::var("GOOGLE_API_KEY")?);
//! let analyst = InvoiceAnalyst::new(Arc::new(client));
//!
//! let image = UploadedImage::new("image/png", std::fs::read("invoice.png")?)?;
//! let answer = analyst.ask(Some(&image), "What is the total amount due?").await?;
//! println!("{}", answer);
//! ```

pub mod analyst;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompts;
pub mod upload;
pub mod web;

pub use analyst::{InvoiceAnalyst, VisionModel};
pub use config::AppConfig;
pub use error::{InvoiceInsightError, Result};
pub use gemini::{GeminiClient, DEFAULT_MODEL};
pub use prompts::SYSTEM_PROMPT_INVOICE_QA;
pub use upload::UploadedImage;
pub use web::{router, serve, AppState, MAX_BODY_BYTES};
