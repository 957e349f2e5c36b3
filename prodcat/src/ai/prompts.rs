//! Prompt templates for the three prediction stages.
//!
//! The classification work is pushed entirely into the model: each template
//! spells out the allowed candidate set and the exact answer shape so the
//! marker-based extraction downstream has something to find.

/// Prompt asking the model to pick a main category from the taxonomy keys.
pub fn build_main_category_prompt(product_name: &str, main_categories: &[String]) -> String {
    format!(
        r#"You are a product categorization assistant. Based on the following main categories,
assign the correct main category to the product.

Main Categories:
{}

Product: "{}"

Provide the result in the following format:
MainCategory: [Category]"#,
        main_categories.join(", "),
        product_name
    )
}

/// Prompt asking for a subcategory within an already-chosen main category.
pub fn build_subcategory_prompt(
    product_name: &str,
    main_category: &str,
    subcategories: &[String],
) -> String {
    format!(
        r#"You are a product categorization assistant. Based on the main category "{}" and its subcategories,
assign the correct subcategory to the product.

Subcategories:
{}

Product: "{}"

Provide the result in the following format:
Subcategory: [Subcategory]"#,
        main_category,
        subcategories.join(", "),
        product_name
    )
}

/// Prompt asking for the four most probable manufacturers on a single line.
pub fn build_manufacturer_prompt(product_name: &str) -> String {
    format!(
        r#"You are a product categorization assistant. Based on the product name,
predict the top 4 most probable manufacturers for the product.

Product: "{}"

Provide the result in the following format:
Manufacturers: [Manufacturer1, Manufacturer2, Manufacturer3, Manufacturer4]"#,
        product_name
    )
}
