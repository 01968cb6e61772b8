use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::selling_plan::SellingPlanAllocation;

/// The caller's current (possibly partial) choice of option values,
/// keyed by option name.
pub type SelectedOptions = HashMap<String, String>;

/// One `(name, value)` entry of a variant's option signature.
///
/// Upstream catalog data may carry null names or values; both deserialize
/// to the empty string and are treated as ordinary values from then on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptionPair {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// One purchasable SKU.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub available_for_sale: bool,
    /// The variant's option signature: one entry per option axis. Within a
    /// product's variant list no two variants should share an identical
    /// signature; if they do, the first by list order wins during matching.
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionPair>,
    /// `None` means the catalog query omitted allocation data entirely;
    /// an empty list means the variant offers no selling plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_plan_allocations: Option<Vec<SellingPlanAllocation>>,
}

/// A named axis of product configuration (e.g. "Color"), derived from the
/// variant list rather than stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}
