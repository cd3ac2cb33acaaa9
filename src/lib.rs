//! Restyle: AI hairstyle editing on top of Gemini image generation.
//!
//! ```no_run
//! use restyle::{GeminiClient, GeminiConfig, ImagePayload, StyleError};
//! use std::path::Path;
//!
//! # async fn run() -> restyle::Result<()> {
//! let client = GeminiClient::new(GeminiConfig::from_env())?;
//! let path = Path::new("me.jpg");
//! let bytes = std::fs::read(path).map_err(|e| StyleError::io(path, e))?;
//! let photo = ImagePayload::from_bytes_sniffed(&bytes);
//! let edited = client.hairstyle().generate(&photo, "short curly bob", None).await?;
//! println!("{}", edited.mime_type());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod session;

pub use config::{Config, GeminiConfig};
pub use error::{Result, StyleError};
pub use gemini::{ContentGenerator, GeminiClient, HttpTransport, StyleRequestAdapter};
pub use models::*;
pub use session::{GenerationState, StyleSession};
