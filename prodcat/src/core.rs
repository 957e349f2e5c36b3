//! Prediction orchestration shared by library consumers and the CLI.
//! No terminal or argument-parsing dependencies.

use serde::Serialize;

use crate::ai::extract::{extract_labeled_list, extract_labeled_value};
use crate::ai::prompts;
use crate::ai::{AiError, CompletionProvider};
use crate::taxonomy::Taxonomy;

/// Marker preceding the main-category answer in a completion reply.
pub const MAIN_CATEGORY_MARKER: &str = "MainCategory:";
/// Marker preceding the subcategory answer in a completion reply.
pub const SUBCATEGORY_MARKER: &str = "Subcategory:";
/// Marker preceding the manufacturer list in a completion reply.
pub const MANUFACTURERS_MARKER: &str = "Manufacturers:";

// Output caps sized to the expected answer shapes.
const LABEL_MAX_TOKENS: u32 = 50;
const LIST_MAX_TOKENS: u32 = 100;
const SAMPLING_TEMPERATURE: f32 = 0.5;

#[derive(Debug, thiserror::Error)]
pub enum ProdcatError {
    #[error("Completion error: {0}")]
    Ai(#[from] AiError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Combined result of the three prediction stages.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub product_name: String,
    pub main_category: String,
    pub subcategory: String,
    pub manufacturers: Vec<String>,
}

impl Prediction {
    /// Bracketed rendering of the manufacturer list, `[]` when empty.
    pub fn manufacturers_list(&self) -> String {
        format!("[{}]", self.manufacturers.join(", "))
    }
}

/// Runs the three prediction stages against an injected provider and taxonomy.
///
/// Both collaborators are constructed once at process start and passed in;
/// the predictor holds no state of its own beyond the borrows.
pub struct Predictor<'a> {
    provider: &'a dyn CompletionProvider,
    taxonomy: &'a Taxonomy,
}

impl<'a> Predictor<'a> {
    pub fn new(provider: &'a dyn CompletionProvider, taxonomy: &'a Taxonomy) -> Self {
        Self { provider, taxonomy }
    }

    /// Predict main category, subcategory, and manufacturers for a product.
    ///
    /// The subcategory stage depends on the main-category answer and runs
    /// after it; the manufacturer stage has no data dependency and is joined
    /// concurrently with the chain. A provider error on any stage aborts the
    /// whole prediction; an unparsable reply does not (it degrades to the
    /// `Unknown`/empty sentinel and the remaining stages still run).
    pub async fn predict(&self, product_name: &str) -> Result<Prediction, ProdcatError> {
        tracing::info!(
            "Predicting with provider: {} ({})",
            self.provider.name(),
            self.provider.model_info().model_name
        );

        let (chain, manufacturers) = tokio::join!(
            self.predict_category_chain(product_name),
            self.predict_manufacturers(product_name),
        );
        let (main_category, subcategory) = chain?;

        Ok(Prediction {
            product_name: product_name.to_string(),
            main_category,
            subcategory,
            manufacturers: manufacturers?,
        })
    }

    /// Predict the main category from the taxonomy's candidate set.
    pub async fn predict_main_category(&self, product_name: &str) -> Result<String, ProdcatError> {
        let candidates = self.taxonomy.main_categories();
        let prompt = prompts::build_main_category_prompt(product_name, &candidates);
        let reply = self
            .provider
            .complete(&prompt, LABEL_MAX_TOKENS, SAMPLING_TEMPERATURE)
            .await?;
        Ok(extract_labeled_value(&reply, MAIN_CATEGORY_MARKER))
    }

    /// Predict the subcategory given an already-chosen main category.
    ///
    /// A main category missing from the taxonomy yields an empty candidate
    /// list; the stage still runs.
    pub async fn predict_subcategory(
        &self,
        product_name: &str,
        main_category: &str,
    ) -> Result<String, ProdcatError> {
        let candidates = self.taxonomy.subcategories(main_category);
        let prompt = prompts::build_subcategory_prompt(product_name, main_category, candidates);
        let reply = self
            .provider
            .complete(&prompt, LABEL_MAX_TOKENS, SAMPLING_TEMPERATURE)
            .await?;
        Ok(extract_labeled_value(&reply, SUBCATEGORY_MARKER))
    }

    /// Predict up to four likely manufacturers. Taxonomy-independent.
    pub async fn predict_manufacturers(
        &self,
        product_name: &str,
    ) -> Result<Vec<String>, ProdcatError> {
        let prompt = prompts::build_manufacturer_prompt(product_name);
        let reply = self
            .provider
            .complete(&prompt, LIST_MAX_TOKENS, SAMPLING_TEMPERATURE)
            .await?;
        Ok(extract_labeled_list(&reply, MANUFACTURERS_MARKER))
    }

    async fn predict_category_chain(
        &self,
        product_name: &str,
    ) -> Result<(String, String), ProdcatError> {
        let main_category = self.predict_main_category(product_name).await?;
        let subcategory = self.predict_subcategory(product_name, &main_category).await?;
        Ok((main_category, subcategory))
    }
}
