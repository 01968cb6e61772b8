// Option catalog builder - derives the distinct option axes and their
// values from the variant list.

use crate::model::{ProductOption, ProductVariant};

/// Derive the full set of product options from the variant list.
///
/// Option names keep the order in which they first appear across the
/// variants, and so do the values within each option; duplicate values
/// collapse to a single entry. An empty variant list yields an empty
/// catalog. Pure function; safe to cache per variant list.
pub fn build_options(variants: &[ProductVariant]) -> Vec<ProductOption> {
    let mut options: Vec<ProductOption> = Vec::new();

    for variant in variants {
        for pair in &variant.selected_options {
            match options.iter_mut().find(|option| option.name == pair.name) {
                Some(option) => {
                    if !option.values.contains(&pair.value) {
                        option.values.push(pair.value.clone());
                    }
                }
                None => options.push(ProductOption {
                    name: pair.name.clone(),
                    values: vec![pair.value.clone()],
                }),
            }
        }
    }

    options
}
