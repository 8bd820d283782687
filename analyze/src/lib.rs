//! Topic and phrase-frequency analysis of museum visitor survey responses.

pub mod analysis;
pub mod config;
pub mod error;
pub mod frequency;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod responses;
pub mod stop_words;
pub mod summary;
pub mod text;
pub mod topic_modeling;

pub use analysis::{run_analysis, AnalysisReport};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
