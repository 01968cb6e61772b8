// Selling plan allocation resolver - pairs a selected variant with a
// selected plan.

use crate::error::SelectionError;
use crate::model::{ProductVariant, SellingPlan, SellingPlanAllocation};

/// Resolve the allocation binding `variant` to `plan`.
///
/// Returns `Ok(None)` when either side is missing, and also when the plan
/// is simply not offered on this variant. A variant whose allocation list
/// is absent altogether is a catalog-query configuration error reported as
/// [`SelectionError::MissingAllocationData`]; an empty list is the valid
/// "no plans" state. Plans are compared by id, never by object identity.
pub fn resolve_allocation<'a>(
    variant: Option<&'a ProductVariant>,
    plan: Option<&SellingPlan>,
) -> Result<Option<&'a SellingPlanAllocation>, SelectionError> {
    let (variant, plan) = match (variant, plan) {
        (Some(variant), Some(plan)) => (variant, plan),
        _ => return Ok(None),
    };

    let allocations = variant.selling_plan_allocations.as_deref().ok_or_else(|| {
        SelectionError::MissingAllocationData {
            variant_id: variant.id.clone(),
        }
    })?;

    Ok(allocations
        .iter()
        .find(|allocation| allocation.selling_plan.id == plan.id))
}
