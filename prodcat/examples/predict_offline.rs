//! Offline prediction example: run the pipeline against a canned provider.
//!
//! Runs without an API key or network access; useful for seeing the output
//! shape and wiring of the library.

use async_trait::async_trait;
use prodcat::prelude::*;
use prodcat::{AiError, ModelInfo};

/// Provider that answers every stage with a fixed, well-formed reply.
struct CannedProvider;

#[async_trait]
impl CompletionProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn complete(
        &self,
        prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, AiError> {
        let reply = if prompt.contains("MainCategory:") {
            "MainCategory: Electronics"
        } else if prompt.contains("Subcategory:") {
            "Subcategory: Smartphones"
        } else {
            "Manufacturers: Apple, Samsung, Google, Huawei"
        };
        Ok(reply.to_string())
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            provider: "canned".to_string(),
            model_name: "fixed-replies".to_string(),
            is_local: true,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), ProdcatError> {
    let product_name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "iPhone 15".to_string());

    let taxonomy = Taxonomy::from_entries([
        (
            "Electronics".to_string(),
            vec!["Smartphones".to_string(), "Laptops".to_string()],
        ),
        (
            "Home & Kitchen".to_string(),
            vec!["Cookware".to_string(), "Appliances".to_string()],
        ),
    ]);

    let provider = CannedProvider;
    let predictor = Predictor::new(&provider, &taxonomy);
    let prediction = predictor.predict(&product_name).await?;

    println!("Predicted Main Category: {}", prediction.main_category);
    println!("Predicted Subcategory: {}", prediction.subcategory);
    println!("Predicted Manufacturers: {}", prediction.manufacturers_list());

    Ok(())
}
