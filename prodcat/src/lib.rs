//! Prodcat - LLM-backed product categorization library
//!
//! This library predicts a product's main category, subcategory, and most
//! likely manufacturers by prompting a hosted text-completion service and
//! extracting labeled answers from its free-text replies.
//!
//! # Quick Start
//!
//! ```no_run
//! use prodcat::{OpenAiClient, Predictor, Taxonomy};
//!
//! # async fn run() -> Result<(), prodcat::ProdcatError> {
//! let client = OpenAiClient::from_env()?;
//! let taxonomy = Taxonomy::load("data.json");
//!
//! let predictor = Predictor::new(&client, &taxonomy);
//! let prediction = predictor.predict("iPhone 15").await?;
//!
//! println!("Predicted Main Category: {}", prediction.main_category);
//! println!("Predicted Subcategory: {}", prediction.subcategory);
//! println!("Predicted Manufacturers: {}", prediction.manufacturers_list());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Taxonomy loading**: category/subcategory candidates from a JSON document
//! - **Prompt building**: fixed instruction templates with explicit answer shapes
//! - **Completion providers**: OpenAI-compatible client behind a swappable trait
//! - **Answer extraction**: marker-based label recovery with sentinel degradation

pub mod ai;
pub mod core;
pub mod taxonomy;

// Re-export main types
pub use crate::core::{Prediction, Predictor, ProdcatError};
pub use crate::ai::{
    AiError, CompletionProvider, LabelOutcome, ModelInfo, OpenAiClient,
};
pub use crate::taxonomy::Taxonomy;

/// Load a taxonomy document (convenience wrapper).
pub fn load_categories<P: AsRef<std::path::Path>>(path: P) -> Taxonomy {
    Taxonomy::load(path)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CompletionProvider, Prediction, Predictor, ProdcatError, Taxonomy,
    };
}
