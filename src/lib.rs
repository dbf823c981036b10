//! Turn a book cover into a social media advertisement image.
//!
//! The flow is linear: fill an [`InputCapture`], hand it to an
//! [`AdWorkflow`], and read back either a [`GeneratedAd`] or an [`AdError`].
//!
//! ```no_run
//! use coverad::{AdWorkflow, GeminiConfig, InputCapture};
//!
//! #[tokio::main]
//! async fn main() -> coverad::Result<()> {
//!     let mut capture = InputCapture::new();
//!     capture.accept_image_file("cover.jpg").await?;
//!     capture.set_title("The Salt Road");
//!     capture.select_preset("square");
//!
//!     let mut workflow = AdWorkflow::from_config(&GeminiConfig::from_env());
//!     workflow.generate(&capture).await;
//!     if let Some(ad) = workflow.result() {
//!         ad.save(std::path::Path::new("."), capture.title()).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod capture;
pub mod config;
pub mod encoding;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod resolver;
pub mod workflow;

pub use builder::{build_payload, build_request, compose_prompt, BRAND_NAME, DEFAULT_DESCRIPTION};
pub use capture::InputCapture;
pub use config::GeminiConfig;
pub use error::{AdError, Result};
pub use gemini::{ImageClient, ImageService};
pub use models::{
    AspectRatio, CoverImage, GeneratedAd, GenerationRequest, OutputPreset, PRESETS,
};
pub use resolver::resolve;
pub use workflow::{AdWorkflow, AttemptState};
