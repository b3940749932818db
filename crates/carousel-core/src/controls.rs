//! Dependent-UI state derivation
//!
//! Pure functions computing what the navigational controls should show
//! for a given engine state: prev/next enablement, handle labels and
//! the active handle (or handle group), and the counter text.

use crate::navigation::Mode;

/// Enablement of the prev/next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl NavButtons {
    pub const DISABLED: Self = Self {
        prev_enabled: false,
        next_enabled: false,
    };
}

/// One handle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    pub label: String,
    /// Original index of the slide this handle navigates to
    pub target_original: usize,
    pub active: bool,
}

/// Prev/next button state for the current position
pub fn nav_buttons(
    enabled: bool,
    mode: Mode,
    current_index: usize,
    total: usize,
    visible: usize,
) -> NavButtons {
    if !enabled {
        return NavButtons::DISABLED;
    }
    match mode {
        Mode::Circular => NavButtons {
            prev_enabled: true,
            next_enabled: true,
        },
        Mode::Bounded => NavButtons {
            prev_enabled: current_index > 0,
            next_enabled: current_index < total.saturating_sub(visible),
        },
    }
}

/// Handle row for the current position
///
/// Grouped handles combine `visible` slides into one button each, labeled
/// with the covered 1-based range. The current handle (or group) carries
/// the active flag. Labels and activity are based on original indices so
/// they stay stable across circular reordering.
pub fn handles(
    grouped: bool,
    total: usize,
    visible: usize,
    current_original: usize,
) -> Vec<Handle> {
    let visible = visible.max(1);

    if !grouped {
        return (0..total)
            .map(|i| Handle {
                label: (i + 1).to_string(),
                target_original: i,
                active: i >= current_original && i < current_original + visible,
            })
            .collect();
    }

    let groups = total.div_ceil(visible);
    let active_group = current_original.div_ceil(visible);

    (0..groups)
        .map(|g| {
            let min = g * visible + 1;
            let max = ((g + 1) * visible).min(total);
            let label = if min < max {
                format!("{} - {}", min, max)
            } else {
                max.to_string()
            };
            Handle {
                label,
                target_original: min - 1,
                active: g == active_group,
            }
        })
        .collect()
}

/// Counter text for the current position, with `%current%` and `%total%`
/// substituted into the template
pub fn counter_text(
    template: &str,
    current_original: usize,
    total: usize,
    visible: usize,
) -> String {
    let start = current_original + 1;
    let current = if visible > 1 {
        let end = (start + visible - 1).min(total);
        format!("{}-{}", start, end)
    } else {
        start.to_string()
    };
    template
        .replace("%current%", &current)
        .replace("%total%", &total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_buttons_disable_at_the_ends() {
        let nav = nav_buttons(true, Mode::Bounded, 0, 5, 2);
        assert!(!nav.prev_enabled);
        assert!(nav.next_enabled);

        let nav = nav_buttons(true, Mode::Bounded, 3, 5, 2);
        assert!(nav.prev_enabled);
        assert!(!nav.next_enabled);

        let nav = nav_buttons(true, Mode::Bounded, 1, 5, 2);
        assert!(nav.prev_enabled && nav.next_enabled);
    }

    #[test]
    fn circular_buttons_never_disable() {
        for index in [0, 4] {
            let nav = nav_buttons(true, Mode::Circular, index, 5, 1);
            assert!(nav.prev_enabled && nav.next_enabled);
        }
    }

    #[test]
    fn disabled_widget_disables_both_buttons() {
        assert_eq!(nav_buttons(false, Mode::Circular, 2, 5, 1), NavButtons::DISABLED);
    }

    #[test]
    fn counter_renders_a_range_when_several_slides_are_visible() {
        assert_eq!(counter_text("%current% of %total%", 3, 10, 3), "4-6 of 10");
        assert_eq!(counter_text("%current% of %total%", 0, 10, 1), "1 of 10");
        // The range caps at the last slide
        assert_eq!(counter_text("%current% of %total%", 8, 10, 3), "9-10 of 10");
        assert_eq!(counter_text("Slide %current%/%total%", 1, 4, 1), "Slide 2/4");
    }

    #[test]
    fn ungrouped_handles_mark_the_visible_window() {
        let handles = handles(false, 5, 2, 1);
        assert_eq!(handles.len(), 5);
        let labels: Vec<&str> = handles.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
        let active: Vec<bool> = handles.iter().map(|h| h.active).collect();
        assert_eq!(active, vec![false, true, true, false, false]);
    }

    #[test]
    fn grouped_handles_cover_ranges_with_a_singleton_tail() {
        let handles = handles(true, 7, 3, 0);
        let labels: Vec<&str> = handles.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["1 - 3", "4 - 6", "7"]);
        assert_eq!(handles[0].target_original, 0);
        assert_eq!(handles[1].target_original, 3);
        assert_eq!(handles[2].target_original, 6);
        assert!(handles[0].active);
    }

    #[test]
    fn active_group_follows_the_current_slide() {
        let row = handles(true, 9, 3, 3);
        let active: Vec<bool> = row.iter().map(|h| h.active).collect();
        assert_eq!(active, vec![false, true, false]);

        // Mid-group positions count toward the next group boundary
        let row = handles(true, 9, 3, 4);
        let active: Vec<bool> = row.iter().map(|h| h.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }
}
