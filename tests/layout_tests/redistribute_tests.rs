//! Cap-and-Redistribute Tests
//!
//! Tests verify:
//! - Capped columns never exceed their cap
//! - Freed budget goes to uncapped columns, left to right
//! - The loop terminates when every column is capped
//! - Widths never drop below one

use pda::layout::cap_and_redistribute;

// =============================================================================
// Capping Tests
// =============================================================================

#[test]
fn test_capped_value_frees_budget_for_key() {
    // Key (no cap) absorbs the 35 columns Value gives up
    assert_eq!(cap_and_redistribute(vec![25, 75], &[0, 40], 100), vec![60, 40]);
}

#[test]
fn test_cap_at_or_above_share_is_untouched() {
    assert_eq!(cap_and_redistribute(vec![25, 75], &[25, 80], 100), vec![25, 75]);
}

#[test]
fn test_every_column_capped_leaves_budget_unused() {
    let widths = cap_and_redistribute(vec![25, 75], &[5, 12], 100);
    assert_eq!(widths, vec![5, 12]);
}

#[test]
fn test_zero_width_floored_to_one() {
    assert_eq!(cap_and_redistribute(vec![0, 0], &[0, 0], 0), vec![1, 1]);
}

#[test]
fn test_missing_caps_mean_uncapped() {
    assert_eq!(cap_and_redistribute(vec![10, 10], &[], 24), vec![12, 12]);
}

// =============================================================================
// Fairness Tests
// =============================================================================

#[test]
fn test_increments_alternate_between_uncapped_columns() {
    // TTL capped at 5 frees budget; Key and Value share it in index order
    for extra in 1..=9usize {
        let widths = cap_and_redistribute(vec![20, 20, 10], &[0, 0, 5], 45 + extra);
        let key_gain = widths[0] - 20;
        let value_gain = widths[1] - 20;
        assert_eq!(key_gain, (extra + 1) / 2, "extra {}", extra);
        assert_eq!(value_gain, extra / 2, "extra {}", extra);
        assert_eq!(widths[2], 5);
    }
}

#[test]
fn test_redistribution_respects_caps_while_growing() {
    let widths = cap_and_redistribute(vec![10, 30, 10], &[12, 0, 4], 60);
    assert_eq!(widths, vec![12, 44, 4]);
}

// =============================================================================
// Property Tests
// =============================================================================

#[test]
fn test_caps_honored_and_budget_not_exceeded() {
    let proportional = vec![25, 50, 25];
    for cap_key in [0usize, 3, 18, 40] {
        for cap_value in [0usize, 1, 30, 90] {
            for cap_ttl in [0usize, 7, 25] {
                let caps = [cap_key, cap_value, cap_ttl];
                let widths = cap_and_redistribute(proportional.clone(), &caps, 100);

                assert!(widths.iter().sum::<usize>() <= 100);
                for (width, cap) in widths.iter().zip(caps) {
                    assert!(*width >= 1);
                    if cap > 0 {
                        assert!(*width <= cap, "{:?} with caps {:?}", widths, caps);
                    }
                }
                if caps.contains(&0) {
                    assert_eq!(widths.iter().sum::<usize>(), 100);
                }
            }
        }
    }
}
