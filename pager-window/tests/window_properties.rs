//! Property coverage for the fixed-width window calculator.

use pager_window::{FixedWidthCalculator, WindowCalculator};
use proptest::prelude::*;

const MAX_TOTAL_PAGES: usize = 4096;
const MAX_WIDTH: usize = 64;

fn arb_shape() -> impl Strategy<Value = (usize, usize)> {
    (1..=MAX_TOTAL_PAGES, 1..=MAX_WIDTH)
}

fn arb_inputs() -> impl Strategy<Value = (usize, usize, usize)> {
    arb_shape().prop_flat_map(|(total_pages, width)| {
        (0..total_pages).prop_map(move |current_index| (current_index, total_pages, width))
    })
}

proptest! {
    #[test]
    fn window_stays_ordered_and_in_bounds((current_index, total_pages, width) in arb_inputs()) {
        let window = FixedWidthCalculator::new(width).calculate_window(current_index, total_pages);

        prop_assert!(window.start_index() <= window.current_index());
        prop_assert!(window.current_index() <= window.end_index());
        prop_assert!(window.end_index() <= total_pages - 1);
        prop_assert_eq!(window.current_index(), current_index);
    }

    #[test]
    fn window_never_exceeds_width((current_index, total_pages, width) in arb_inputs()) {
        let window = FixedWidthCalculator::new(width).calculate_window(current_index, total_pages);

        prop_assert!(window.end_index() - window.start_index() <= width - 1);
    }

    #[test]
    fn window_fills_to_width_or_collapses((current_index, total_pages, width) in arb_inputs()) {
        let window = FixedWidthCalculator::new(width).calculate_window(current_index, total_pages);

        if total_pages <= width {
            prop_assert_eq!(window.start_index(), 0);
            prop_assert_eq!(window.end_index(), total_pages - 1);
        } else {
            // Enough pages exist on some side of the cursor, so the width
            // target is always met exactly.
            prop_assert_eq!(window.end_index() - window.start_index(), width - 1);
        }
    }

    #[test]
    fn cursor_at_start_left_clamps((total_pages, width) in arb_shape()) {
        let window = FixedWidthCalculator::new(width).calculate_window(0, total_pages);

        prop_assert_eq!(window.start_index(), 0);
        prop_assert_eq!(window.end_index(), width.min(total_pages) - 1);
    }

    #[test]
    fn cursor_at_end_right_clamps((total_pages, width) in arb_shape()) {
        let window = FixedWidthCalculator::new(width).calculate_window(total_pages - 1, total_pages);

        prop_assert_eq!(window.end_index(), total_pages - 1);
        prop_assert_eq!(window.start_index(), total_pages.saturating_sub(width));
    }

    #[test]
    fn recomputation_is_idempotent((current_index, total_pages, width) in arb_inputs()) {
        let calculator = FixedWidthCalculator::new(width);

        prop_assert_eq!(
            calculator.calculate_window(current_index, total_pages),
            calculator.calculate_window(current_index, total_pages)
        );
    }
}
