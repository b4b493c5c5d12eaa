pub mod config;
pub mod error;
pub mod summarizer;

pub use config::Config;
pub use error::{AppError, Result};
pub use summarizer::{summarize, SummaryOutput};
