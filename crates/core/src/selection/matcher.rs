// Variant matcher - first-match resolution of a selection map onto the
// variant list.

use crate::model::{ProductVariant, SelectedOptions};

/// Find the first variant whose full option signature is satisfied by
/// `selection`.
///
/// Every `(name, value)` pair of a variant's signature must be present in
/// the selection with an equal value for that variant to match. Selection
/// entries for names the variant does not carry are ignored; a missing
/// entry for one of the variant's names rules that variant out. An empty
/// selection therefore matches only a variant with an empty signature.
///
/// Evaluation is a single pass in list order and the first match wins, so
/// the result is deterministic even when the catalog violates the
/// signature-uniqueness invariant.
pub fn find_variant<'a>(
    variants: &'a [ProductVariant],
    selection: &SelectedOptions,
) -> Option<&'a ProductVariant> {
    find_variant_index(variants, selection).map(|index| &variants[index])
}

/// Index form of [`find_variant`], for callers that hold the variant list
/// and want to store the match position rather than a borrow.
pub fn find_variant_index(variants: &[ProductVariant], selection: &SelectedOptions) -> Option<usize> {
    variants.iter().position(|variant| {
        variant
            .selected_options
            .iter()
            .all(|pair| selection.get(&pair.name).map(String::as_str) == Some(pair.value.as_str()))
    })
}
