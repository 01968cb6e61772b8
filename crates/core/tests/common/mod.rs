use std::fs;
use std::path::PathBuf;

use shopkit_core::model::{ProductVariant, SelectedOptionPair};

#[allow(dead_code)]
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

#[allow(dead_code)]
pub fn read_fixture(file_name: &str) -> String {
    let path = fixture_path(file_name);
    fs::read_to_string(path).expect("fixture should be readable")
}

#[allow(dead_code)]
pub fn make_variant(id: &str, pairs: &[(&str, &str)], available: bool) -> ProductVariant {
    ProductVariant {
        id: id.to_string(),
        available_for_sale: available,
        selected_options: pairs
            .iter()
            .map(|(name, value)| SelectedOptionPair {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
        selling_plan_allocations: Some(vec![]),
    }
}
