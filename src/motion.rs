//! Scroll-driven animation math.
//!
//! Everything here is pure over `(progress, index, step kinds)` so the
//! interpolation can be unit tested without a browser. Components translate
//! the returned [`ItemStyle`] into inline style strings; this module never
//! touches the DOM.

/// Offset added to `scrollY` when probing which section is under the reader.
pub const SECTION_PROBE_BIAS: f64 = 100.0;

/// Fraction of a step's window spent easing in. The previous step's ease-out
/// overlaps this window so adjacent steps cross-fade.
const ENTRY_FRACTION: f64 = 0.15;

/// Normalized progress through a tall scrolling container.
///
/// `top` is the container's bounding-box top relative to the viewport and
/// `height` its rendered height. A container no taller than the viewport has
/// no scroll distance to measure, so the result snaps to 0 or 1 instead of
/// dividing by a non-positive number.
pub fn scroll_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let total = height - viewport;
    if total <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    ((-top) / total).clamp(0.0, 1.0)
}

/// Progress of a section traversing the viewport: 0 as its top enters from
/// below, 1 as its bottom leaves above. Drives the skills glow line.
pub fn section_through_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let span = height + viewport;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport - top) / span).clamp(0.0, 1.0)
}

/// Cubic easing `t²(3−2t)`. Continuous velocity at window boundaries, unlike
/// plain linear interpolation.
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// One content block in a staged scroll deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Heading,
    Card,
    Skill,
    Line,
    Video,
    Climb,
}

impl StepKind {
    /// Relative share of the deck's scroll range, in viewport heights.
    /// Cards read faster than headings, so they get less runway.
    pub fn weight(self) -> f64 {
        match self {
            StepKind::Card => 0.6,
            StepKind::Heading => 0.8,
            _ => 1.0,
        }
    }

    fn profile(self) -> Profile {
        match self {
            StepKind::Heading => Profile {
                enter_from: (30.0, 0.0),
                exit_to: (-40.0, 0.0),
                min_scale: 0.95,
                pin_at_end: false,
                glide: false,
            },
            StepKind::Card | StepKind::Skill => Profile {
                enter_from: (50.0, 0.0),
                exit_to: (-50.0, 0.0),
                min_scale: 0.95,
                pin_at_end: false,
                glide: false,
            },
            StepKind::Line => Profile {
                enter_from: (0.0, 0.0),
                exit_to: (0.0, 0.0),
                min_scale: 1.0,
                pin_at_end: false,
                glide: false,
            },
            StepKind::Video => Profile {
                enter_from: (0.0, 0.0),
                exit_to: (0.0, 0.0),
                min_scale: 0.95,
                pin_at_end: true,
                glide: false,
            },
            StepKind::Climb => Profile {
                enter_from: (-30.0, 40.0),
                exit_to: (30.0, -40.0),
                min_scale: 0.95,
                pin_at_end: false,
                glide: true,
            },
        }
    }
}

/// Per-kind timing profile: where an item enters from and exits to (in
/// viewport units), how far it shrinks while off-center, and whether it
/// stays pinned once reached or glides continuously through its window.
#[derive(Debug, Clone, Copy)]
struct Profile {
    enter_from: (f64, f64),
    exit_to: (f64, f64),
    min_scale: f64,
    pin_at_end: bool,
    glide: bool,
}

/// Computed presentation for one deck item. Translation units are decided by
/// the rendering adapter (viewport units for slide decks, percent for the
/// card stack); `clip_right` is the percentage wiped off the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub clip_right: Option<f64>,
    pub hidden: bool,
}

impl ItemStyle {
    fn resting() -> Self {
        ItemStyle {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            clip_right: None,
            hidden: false,
        }
    }

    fn hidden_at(offset: (f64, f64)) -> Self {
        ItemStyle {
            opacity: 0.0,
            translate_x: offset.0,
            translate_y: offset.1,
            scale: 1.0,
            clip_right: None,
            hidden: true,
        }
    }
}

/// `[start, end)` of item `i`'s window within `[0, 1]`, sized by weight.
pub fn window_of(index: usize, kinds: &[StepKind]) -> (f64, f64) {
    let total: f64 = kinds.iter().map(|k| k.weight()).sum();
    if total <= 0.0 {
        return (0.0, 1.0);
    }
    let before: f64 = kinds[..index].iter().map(|k| k.weight()).sum();
    (before / total, (before + kinds[index].weight()) / total)
}

/// Unified slide-deck curve: ease in over the first part of the window, hold,
/// then ease out while the next item eases in. Items outside their window sit
/// hidden at their entry/exit offsets, so the function is total over all
/// progress values.
pub fn slide_style(progress: f64, kinds: &[StepKind], index: usize) -> ItemStyle {
    let kind = kinds[index];
    let profile = kind.profile();
    let (start, end) = window_of(index, kinds);

    if profile.glide {
        return glide_style(progress, start, end, profile);
    }

    let total: f64 = kinds.iter().map(|k| k.weight()).sum();
    let entry_len = ENTRY_FRACTION * kind.weight() / total;

    if progress < start {
        return ItemStyle::hidden_at(profile.enter_from);
    }
    if entry_len > 0.0 && progress < start + entry_len {
        let t = smoothstep((progress - start) / entry_len);
        return ItemStyle {
            opacity: t,
            translate_x: profile.enter_from.0 * (1.0 - t),
            translate_y: profile.enter_from.1 * (1.0 - t),
            scale: profile.min_scale + (1.0 - profile.min_scale) * t,
            clip_right: None,
            hidden: false,
        };
    }
    if progress < end || profile.pin_at_end {
        return ItemStyle::resting();
    }
    // The exit overlaps the next item's ease-in; the final item has no
    // successor and simply holds.
    let exit_len = match kinds.get(index + 1) {
        Some(next) => ENTRY_FRACTION * next.weight() / total,
        None => return ItemStyle::resting(),
    };
    if exit_len > 0.0 && progress < end + exit_len {
        let t = smoothstep((progress - end) / exit_len);
        return ItemStyle {
            opacity: 1.0 - t,
            translate_x: profile.exit_to.0 * t,
            translate_y: profile.exit_to.1 * t,
            scale: 1.0 - (1.0 - profile.min_scale) * t,
            clip_right: None,
            hidden: false,
        };
    }
    ItemStyle::hidden_at(profile.exit_to)
}

/// Continuous drift across the whole window with eased fades at both edges.
fn glide_style(progress: f64, start: f64, end: f64, profile: Profile) -> ItemStyle {
    let span = end - start;
    if span <= 0.0 || progress < start {
        return ItemStyle::hidden_at(profile.enter_from);
    }
    if progress >= end {
        return ItemStyle::hidden_at(profile.exit_to);
    }
    let t = (progress - start) / span;
    let fade = if t < 0.2 {
        smoothstep(t / 0.2)
    } else if t > 0.8 {
        smoothstep((1.0 - t) / 0.2)
    } else {
        1.0
    };
    ItemStyle {
        opacity: fade,
        translate_x: profile.enter_from.0 + (profile.exit_to.0 - profile.enter_from.0) * t,
        translate_y: profile.enter_from.1 + (profile.exit_to.1 - profile.enter_from.1) * t,
        scale: 1.0 - (1.0 - profile.min_scale) * t,
        clip_right: None,
        hidden: false,
    }
}

/// Stacked-carousel curve: upcoming cards sit scaled and dimmed behind the
/// front card, passed cards wipe out through a right-edge clip, and the last
/// card pins fully visible once reached.
pub fn stack_style(progress: f64, index: usize, count: usize) -> ItemStyle {
    if count == 0 {
        return ItemStyle::resting();
    }
    let pos = progress * count.saturating_sub(1) as f64;
    let depth = index as f64 - pos;
    let last = index + 1 == count;

    if depth < 0.0 {
        if last {
            return ItemStyle::resting();
        }
        let out = -depth;
        if out >= 1.0 {
            return ItemStyle {
                opacity: 1.0,
                translate_x: -10.0,
                translate_y: 0.0,
                scale: 0.9,
                clip_right: Some(100.0),
                hidden: true,
            };
        }
        let eased = smoothstep(out);
        return ItemStyle {
            opacity: 1.0,
            translate_x: -eased * 10.0,
            translate_y: 0.0,
            scale: 1.0,
            clip_right: Some(eased * 100.0),
            hidden: false,
        };
    }

    if depth > 2.0 {
        return ItemStyle {
            opacity: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 0.9,
            clip_right: None,
            hidden: true,
        };
    }
    ItemStyle {
        opacity: (1.0 - depth * 0.15).max(0.6),
        translate_x: 0.0,
        translate_y: 0.0,
        scale: (1.0 - depth * 0.04).max(0.9),
        clip_right: None,
        hidden: false,
    }
}

/// Which card is frontmost in a stacked carousel at this progress.
pub fn stack_active_index(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let pos = progress * count.saturating_sub(1) as f64;
    (pos.round() as usize).min(count - 1)
}

/// First section in document order whose `[top, top + height)` range contains
/// `scroll_y + SECTION_PROBE_BIAS`. When the probe lands in a gap the
/// previous selection is retained, so the indicator never resets mid-page.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &[(&'a str, f64, f64)],
    current: &'a str,
) -> &'a str {
    let probe = scroll_y + SECTION_PROBE_BIAS;
    for (id, top, height) in sections {
        if probe >= *top && probe < top + height {
            return id;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn progress_clamps_and_is_monotone() {
        // Container taller than the viewport: ordinary interpolation.
        assert!((scroll_progress(0.0, 3000.0, 1000.0)).abs() < EPS);
        assert!((scroll_progress(-1000.0, 3000.0, 1000.0) - 0.5).abs() < EPS);
        assert!((scroll_progress(-2000.0, 3000.0, 1000.0) - 1.0).abs() < EPS);
        // Out of range clamps rather than extrapolates.
        assert_eq!(scroll_progress(500.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-9000.0, 3000.0, 1000.0), 1.0);
        // Monotone in -top.
        let mut prev = -1.0;
        for i in 0..=100 {
            let top = -(i as f64) * 25.0;
            let p = scroll_progress(top, 3000.0, 1000.0);
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn progress_degenerate_container_is_finite() {
        // Container shorter than the viewport must not divide by <= 0.
        let below = scroll_progress(50.0, 400.0, 1000.0);
        let above = scroll_progress(-50.0, 400.0, 1000.0);
        assert!(below.is_finite() && above.is_finite());
        assert_eq!(below, 0.0);
        assert_eq!(above, 1.0);
        // Exactly viewport-sized is the same degenerate case.
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn smoothstep_properties() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < EPS);
        // Clamped outside [0, 1].
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(2.0), 1.0);
        let mut prev = -1.0;
        for i in 0..=100 {
            let v = smoothstep(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn windows_partition_unit_range_by_weight() {
        let kinds = [StepKind::Heading, StepKind::Card, StepKind::Line];
        let (s0, e0) = window_of(0, &kinds);
        let (s1, e1) = window_of(1, &kinds);
        let (s2, e2) = window_of(2, &kinds);
        assert_eq!(s0, 0.0);
        assert!((e0 - s1).abs() < EPS);
        assert!((e1 - s2).abs() < EPS);
        assert!((e2 - 1.0).abs() < EPS);
        // Heading window (0.8) is wider than the card window (0.6).
        assert!(e0 - s0 > e1 - s1);
    }

    #[test]
    fn slide_steps_enter_hold_and_exit() {
        let kinds = [StepKind::Card, StepKind::Card, StepKind::Card];
        let (s1, e1) = window_of(1, &kinds);

        // Before its window: hidden on the entry side.
        let before = slide_style(s1 - 0.01, &kinds, 1);
        assert!(before.hidden);
        assert!(before.translate_x > 0.0);

        // Mid-window: fully resting.
        let held = slide_style((s1 + e1) / 2.0, &kinds, 1);
        assert_eq!(held.opacity, 1.0);
        assert_eq!(held.translate_x, 0.0);
        assert_eq!(held.scale, 1.0);

        // While item 2 eases in, item 1 eases out toward the exit side.
        let leaving = slide_style(e1 + 0.01, &kinds, 1);
        assert!(leaving.opacity < 1.0);
        assert!(leaving.translate_x < 0.0);
        assert!(!leaving.hidden);

        // Long gone: hidden on the exit side.
        let gone = slide_style(1.0, &kinds, 1);
        assert!(gone.hidden);
        assert!(gone.translate_x < 0.0);
    }

    #[test]
    fn slide_entry_is_smoothstepped() {
        let kinds = [StepKind::Card, StepKind::Card];
        let (s1, e1) = window_of(1, &kinds);
        let entry_len = 0.15 * (e1 - s1);
        let half = slide_style(s1 + entry_len / 2.0, &kinds, 1);
        // Smoothstep(0.5) = 0.5 exactly at the entry midpoint.
        assert!((half.opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn last_slide_item_holds_without_exit() {
        let kinds = [StepKind::Heading, StepKind::Card];
        let style = slide_style(1.0, &kinds, 1);
        assert_eq!(style.opacity, 1.0);
        assert!(!style.hidden);
    }

    #[test]
    fn pinned_kind_never_exits() {
        let kinds = [StepKind::Video, StepKind::Card];
        let (_, e0) = window_of(0, &kinds);
        let style = slide_style(e0 + 0.1, &kinds, 0);
        assert_eq!(style.opacity, 1.0);
        assert!(!style.hidden);
    }

    #[test]
    fn glide_drifts_diagonally_with_edge_fades() {
        let kinds = [StepKind::Climb];
        let start = slide_style(0.0, &kinds, 0);
        assert_eq!(start.opacity, 0.0);
        let mid = slide_style(0.5, &kinds, 0);
        assert_eq!(mid.opacity, 1.0);
        assert!((mid.translate_x).abs() < EPS);
        assert!((mid.translate_y).abs() < EPS);
        let late = slide_style(0.75, &kinds, 0);
        assert!(late.translate_x > 0.0);
        assert!(late.translate_y < 0.0);
    }

    #[test]
    fn stack_depth_scales_and_hides() {
        // At progress 0, card 0 is frontmost and card 3 is out of the stack.
        let front = stack_style(0.0, 0, 6);
        assert_eq!(front.scale, 1.0);
        assert_eq!(front.opacity, 1.0);
        let second = stack_style(0.0, 1, 6);
        assert!(second.scale < 1.0);
        assert!(second.opacity < 1.0);
        assert!(stack_style(0.0, 3, 6).hidden);
    }

    #[test]
    fn stack_passed_cards_clip_out_and_last_pins() {
        // Progress 1 puts the last card in front; earlier cards are wiped.
        let wiped = stack_style(1.0, 0, 6);
        assert!(wiped.hidden);
        assert_eq!(wiped.clip_right, Some(100.0));
        let pinned = stack_style(1.0, 5, 6);
        assert_eq!(pinned, ItemStyle::resting());
        // Past the last card's slot it still pins.
        let mid_wipe = stack_style(0.1, 0, 6);
        assert!(!mid_wipe.hidden);
        assert!(mid_wipe.clip_right.unwrap() > 0.0);
        assert!(mid_wipe.translate_x < 0.0);
    }

    #[test]
    fn stack_active_index_rounds_to_nearest() {
        assert_eq!(stack_active_index(0.0, 6), 0);
        assert_eq!(stack_active_index(1.0, 6), 5);
        assert_eq!(stack_active_index(0.5, 6), 3);
        assert_eq!(stack_active_index(0.5, 0), 0);
    }

    #[test]
    fn active_section_first_match_wins_and_gaps_retain() {
        let sections = [
            ("home", 0.0, 800.0),
            ("journey", 800.0, 1200.0),
            ("about", 2500.0, 700.0),
        ];
        assert_eq!(active_section(0.0, &sections, "home"), "home");
        // scroll_y 750 + 100 bias lands inside "journey".
        assert_eq!(active_section(750.0, &sections, "home"), "journey");
        // Probe in the gap between journey and about keeps the old value.
        assert_eq!(active_section(2100.0, &sections, "journey"), "journey");
        assert_eq!(active_section(2450.0, &sections, "journey"), "about");
        // Range end is exclusive.
        assert_eq!(active_section(700.0, &sections, "home"), "journey");
    }

    #[test]
    fn section_through_progress_clamps() {
        assert_eq!(section_through_progress(1000.0, 2000.0, 1000.0), 0.0);
        assert_eq!(section_through_progress(-2000.0, 2000.0, 1000.0), 1.0);
        let mid = section_through_progress(500.0, 2000.0, 1000.0);
        assert!(mid > 0.0 && mid < 1.0);
        // Degenerate span never divides by zero.
        assert_eq!(section_through_progress(0.0, 0.0, 0.0), 0.0);
    }
}
