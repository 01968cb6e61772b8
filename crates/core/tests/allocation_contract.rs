// User Story 3: Resolve the selling plan allocation for a selected pair
// Contract tests distinguishing soft misses from the missing-data error.

mod common;

use common::make_variant;
use shopkit_core::model::{Money, SellingPlan, SellingPlanAllocation, SellingPlanPriceAdjustment};
use shopkit_core::selection::resolve_allocation;
use shopkit_core::SelectionError;

fn plan(id: &str) -> SellingPlan {
    SellingPlan {
        id: id.to_string(),
        name: format!("Plan {id}"),
        description: None,
        recurring_deliveries: true,
    }
}

fn allocation(plan_id: &str, amount: &str) -> SellingPlanAllocation {
    SellingPlanAllocation {
        selling_plan: plan(plan_id),
        price_adjustments: vec![SellingPlanPriceAdjustment {
            price: Money {
                amount: amount.to_string(),
                currency_code: "USD".to_string(),
            },
            compare_at_price: None,
            per_delivery_price: None,
        }],
    }
}

#[test]
fn test_absent_variant_or_plan_is_not_an_error() {
    let variant = make_variant("v1", &[], true);
    let p = plan("p1");

    assert_eq!(resolve_allocation(None, None), Ok(None));
    assert_eq!(resolve_allocation(Some(&variant), None), Ok(None));
    assert_eq!(resolve_allocation(None, Some(&p)), Ok(None));
}

#[test]
fn test_allocation_resolves_by_plan_id_equality() {
    let mut variant = make_variant("v1", &[], true);
    variant.selling_plan_allocations = Some(vec![
        allocation("p1", "10.00"),
        allocation("p2", "9.00"),
    ]);

    // A fresh plan instance with the same id must still resolve.
    let requested = plan("p2");
    let resolved = resolve_allocation(Some(&variant), Some(&requested))
        .unwrap()
        .expect("allocation should resolve");

    assert_eq!(resolved.selling_plan.id, "p2");
    assert_eq!(resolved.price_adjustments[0].price.amount, "9.00");
}

#[test]
fn test_plan_not_offered_is_a_soft_miss() {
    let mut variant = make_variant("v1", &[], true);
    variant.selling_plan_allocations = Some(vec![allocation("p1", "10.00")]);

    let requested = plan("p9");
    assert_eq!(resolve_allocation(Some(&variant), Some(&requested)), Ok(None));
}

#[test]
fn test_empty_list_and_absent_list_differ() {
    let requested = plan("p1");

    // Empty list: the variant legitimately offers no plans.
    let empty = make_variant("v1", &[], true);
    assert_eq!(resolve_allocation(Some(&empty), Some(&requested)), Ok(None));

    // Absent list: the catalog query omitted required data.
    let mut bare = make_variant("v2", &[], true);
    bare.selling_plan_allocations = None;
    let error = resolve_allocation(Some(&bare), Some(&requested)).unwrap_err();
    assert_eq!(
        error,
        SelectionError::MissingAllocationData {
            variant_id: "v2".to_string()
        }
    );
}

#[test]
fn test_first_allocation_wins_on_duplicate_plan_ids() {
    let mut variant = make_variant("v1", &[], true);
    variant.selling_plan_allocations = Some(vec![
        allocation("p1", "10.00"),
        allocation("p1", "8.00"),
    ]);

    let requested = plan("p1");
    let resolved = resolve_allocation(Some(&variant), Some(&requested))
        .unwrap()
        .expect("allocation should resolve");
    assert_eq!(resolved.price_adjustments[0].price.amount, "10.00");
}
