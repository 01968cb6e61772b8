// Stock probe - answers "would this combination be purchasable" without
// touching selection state.

use crate::model::{ProductVariant, SelectedOptions};
use crate::selection::matcher::find_variant;

/// Probe whether overriding one option of `current` with `value` resolves
/// to a purchasable variant.
///
/// The hypothetical selection is `current` with only the `name` entry
/// replaced. When it matches no variant at all the probe reports `true`:
/// an unresolvable combination must not disable the control that would
/// select it.
pub fn is_option_in_stock(
    variants: &[ProductVariant],
    current: &SelectedOptions,
    name: &str,
    value: &str,
) -> bool {
    let mut proposed = current.clone();
    proposed.insert(name.to_string(), value.to_string());

    find_variant(variants, &proposed)
        .map(|variant| variant.available_for_sale)
        .unwrap_or(true)
}
