//! Position resolution
//!
//! Converts a requested target index into a validated one. Bounded mode
//! clamps; circular mode physically rotates slides to the opposite end
//! and compensates the slider offset so no visual jump occurs. There is
//! no invalid-index error: every request resolves.

use super::Mode;
use crate::slides::SlideDeck;

/// A validated navigation target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Validated display index to move to
    pub index: usize,
    /// Offset adjustment compensating a circular reorder; zero when no
    /// slides moved
    pub offset_delta: f32,
}

/// Resolve `requested` against the deck, reordering it in circular mode
///
/// `advance` is the physical distance between slide origins; the
/// returned `offset_delta` is the equivalent physical shift for the
/// slides that moved.
pub fn resolve_target(
    deck: &mut SlideDeck,
    mode: Mode,
    visible: usize,
    requested: i64,
    advance: f32,
) -> Resolution {
    let total = deck.len();
    if total == 0 || total <= visible {
        // Nothing to scroll
        return Resolution {
            index: 0,
            offset_delta: 0.0,
        };
    }

    let max_start = total - visible;

    match mode {
        Mode::Bounded => Resolution {
            index: requested.clamp(0, max_start as i64) as usize,
            offset_delta: 0.0,
        },
        Mode::Circular => {
            if requested < 0 {
                // Move slides from the tail to the head until index 0 is
                // a valid reference for the request
                let count = (requested.unsigned_abs() as usize).min(total);
                deck.rotate_tail_to_front(count);
                Resolution {
                    index: 0,
                    offset_delta: -(count as f32) * advance,
                }
            } else if requested as usize > max_start {
                // Symmetric: move leading slides to the end
                let count = (requested as usize - max_start).min(total);
                deck.rotate_head_to_back(count);
                Resolution {
                    index: (requested as usize - count).min(max_start),
                    offset_delta: count as f32 * advance,
                }
            } else {
                // Already aligned; no slides move
                Resolution {
                    index: requested as usize,
                    offset_delta: 0.0,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADVANCE: f32 = 100.0;

    #[test]
    fn bounded_clamps_into_the_valid_window() {
        let mut deck = SlideDeck::new(5);

        let res = resolve_target(&mut deck, Mode::Bounded, 2, -5, ADVANCE);
        assert_eq!(res, Resolution { index: 0, offset_delta: 0.0 });

        let res = resolve_target(&mut deck, Mode::Bounded, 2, 10, ADVANCE);
        assert_eq!(res, Resolution { index: 3, offset_delta: 0.0 });

        // In-range requests pass through, and bounded mode never reorders
        let res = resolve_target(&mut deck, Mode::Bounded, 2, 2, ADVANCE);
        assert_eq!(res.index, 2);
        assert_eq!(deck, SlideDeck::new(5));
    }

    #[test]
    fn everything_visible_resolves_to_zero() {
        let mut deck = SlideDeck::new(3);
        for requested in [-2, 0, 7] {
            let res = resolve_target(&mut deck, Mode::Circular, 3, requested, ADVANCE);
            assert_eq!(res, Resolution { index: 0, offset_delta: 0.0 });
        }
        assert_eq!(deck, SlideDeck::new(3));
    }

    #[test]
    fn circular_wrap_backward_rotates_the_tail_to_the_front() {
        let mut deck = SlideDeck::new(5);
        let res = resolve_target(&mut deck, Mode::Circular, 1, -1, ADVANCE);

        assert_eq!(res.index, 0);
        assert_eq!(res.offset_delta, -ADVANCE);
        let originals: Vec<usize> = deck.order().iter().map(|id| id.0).collect();
        assert_eq!(originals, vec![4, 0, 1, 2, 3]);
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn circular_wrap_forward_rotates_the_head_to_the_back() {
        let mut deck = SlideDeck::new(5);
        let res = resolve_target(&mut deck, Mode::Circular, 1, 5, ADVANCE);

        assert_eq!(res.index, 4);
        assert_eq!(res.offset_delta, ADVANCE);
        let originals: Vec<usize> = deck.order().iter().map(|id| id.0).collect();
        assert_eq!(originals, vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn circular_reorder_preserves_the_identity_set() {
        let mut deck = SlideDeck::new(6);
        resolve_target(&mut deck, Mode::Circular, 2, -3, ADVANCE);
        resolve_target(&mut deck, Mode::Circular, 2, 9, ADVANCE);

        assert_eq!(deck.len(), 6);
        let mut originals: Vec<usize> = deck.order().iter().map(|id| id.0).collect();
        originals.sort_unstable();
        assert_eq!(originals, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn aligned_circular_request_is_a_no_op() {
        let mut deck = SlideDeck::new(5);
        let res = resolve_target(&mut deck, Mode::Circular, 2, 3, ADVANCE);

        assert_eq!(res, Resolution { index: 3, offset_delta: 0.0 });
        assert_eq!(deck, SlideDeck::new(5));
    }

    #[test]
    fn prev_then_next_five_times_restores_the_original_order() {
        let mut deck = SlideDeck::new(5);
        let mut current: i64 = 0;

        let res = resolve_target(&mut deck, Mode::Circular, 1, current - 1, ADVANCE);
        current = res.index as i64;
        assert_eq!(deck.original_index_of(0), Some(4));

        for _ in 0..5 {
            let res = resolve_target(&mut deck, Mode::Circular, 1, current + 1, ADVANCE);
            current = res.index as i64;
        }

        let originals: Vec<usize> = deck.order().iter().map(|id| id.0).collect();
        assert_eq!(originals, vec![0, 1, 2, 3, 4]);
        assert_eq!(deck.original_index_of(0), Some(0));
    }
}
