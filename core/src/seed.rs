// core/src/seed.rs

//! Sample grocery catalog a fresh service starts with.

use crate::model::NewProduct;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200.png";

// (name, price, description, hint, category, in_stock)
const SAMPLE: &[(&str, f64, &str, &str, &str, bool)] = &[
  ("Organic Apples", 3.99, "Crisp, sweet organic apples picked this week.", "fruit apple", "fruits", true),
  ("Whole Wheat Bread", 4.49, "Freshly baked whole wheat loaf.", "bread bakery", "bakery", true),
  ("Free-Range Eggs", 5.99, "A dozen large free-range eggs.", "eggs breakfast", "dairy", true),
  ("Organic Spinach", 2.99, "Tender organic baby spinach leaves.", "vegetable leafy greens", "vegetables", true),
  ("Chicken Breast", 9.99, "Boneless, skinless chicken breast fillets.", "meat poultry", "meat", true),
  ("Greek Yogurt", 4.99, "Thick and creamy plain Greek yogurt.", "dairy yogurt", "dairy", true),
  ("Brown Rice", 2.49, "Long grain brown rice, 1kg bag.", "grain rice", "grains", false),
  ("Almond Milk", 3.79, "Unsweetened almond milk, 1 litre.", "dairy alternative milk", "dairy", true),
];

/// Creation inputs for the sample catalog, in the order they are inserted.
pub fn sample_products() -> Vec<NewProduct> {
  SAMPLE
    .iter()
    .map(|&(name, price, description, hint, category, in_stock)| {
      NewProduct::new(name, price, description, PLACEHOLDER_IMAGE, hint)
        .with_category(category)
        .with_in_stock(in_stock)
    })
    .collect()
}
