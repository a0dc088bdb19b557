//! Page view state - scroll position, viewport bounds and anchor rows.
//!
//! The handler layer issues scroll and navigation commands against this state;
//! the TUI layer writes the content size and anchor rows back on every render.

use std::collections::HashMap;

use eddie_core::Anchor;
use tracing::debug;

/// Frames an eased anchor scroll takes (one frame per tick)
pub const SMOOTH_SCROLL_TICKS: u16 = 8;

// ─────────────────────────────────────────────────────────────────────────────
// ScrollAnimation
// ─────────────────────────────────────────────────────────────────────────────

/// An in-flight eased scroll between two offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollAnimation {
    from: usize,
    to: usize,
    elapsed: u16,
    duration: u16,
}

impl ScrollAnimation {
    fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            elapsed: 0,
            duration: SMOOTH_SCROLL_TICKS,
        }
    }

    pub fn target(&self) -> usize {
        self.to
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Ease-out cubic position for the current frame
    fn position(&self) -> usize {
        if self.is_finished() {
            return self.to;
        }
        let t = f64::from(self.elapsed) / f64::from(self.duration);
        let eased = 1.0 - (1.0 - t).powi(3);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PageViewState
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct PageViewState {
    /// First visible row of the composed page
    pub offset: usize,
    /// Rows in the composed page (set during render)
    pub total_lines: usize,
    /// Rows in the viewport (set during render)
    pub visible_lines: usize,
    /// Ease anchor navigation instead of jumping
    pub smooth_scroll: bool,
    anchors: HashMap<Anchor, usize>,
    animation: Option<ScrollAnimation>,
    /// Navigation requested before the page was first laid out
    pending_anchor: Option<Anchor>,
}

impl PageViewState {
    pub fn new(smooth_scroll: bool) -> Self {
        Self {
            smooth_scroll,
            ..Self::default()
        }
    }

    pub fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.animation = None;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.animation = None;
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.animation = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.animation = None;
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        let max = self.max_offset();
        if self.offset > max {
            self.offset = max;
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(max);
        }
    }

    /// Record where each anchor landed in the latest layout
    pub fn set_anchors(&mut self, anchors: HashMap<Anchor, usize>) {
        self.anchors = anchors;
        if let Some(anchor) = self.pending_anchor.take() {
            self.scroll_to_anchor(anchor);
        }
    }

    pub fn anchor_line(&self, anchor: Anchor) -> Option<usize> {
        self.anchors.get(&anchor).copied()
    }

    /// Scroll so the anchor's first row sits at the top of the viewport.
    ///
    /// Unknown identifiers leave the offset untouched and return `None`.
    pub fn navigate_to(&mut self, id: &str) -> Option<Anchor> {
        let Some(anchor) = Anchor::from_id(id) else {
            debug!("Ignoring navigation to unknown anchor {:?}", id);
            return None;
        };
        self.scroll_to_anchor(anchor);
        Some(anchor)
    }

    pub fn scroll_to_anchor(&mut self, anchor: Anchor) {
        let Some(line) = self.anchor_line(anchor) else {
            // Not laid out yet, resolved on the next set_anchors
            self.pending_anchor = Some(anchor);
            return;
        };
        let target = line.min(self.max_offset());

        if self.smooth_scroll && target != self.offset {
            self.animation = Some(ScrollAnimation::new(self.offset, target));
        } else {
            self.animation = None;
            self.offset = target;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    /// Advance the eased scroll by one frame
    pub fn tick(&mut self) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.elapsed += 1;
        self.offset = animation.position();
        if animation.is_finished() {
            self.animation = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(smooth: bool) -> PageViewState {
        let mut state = PageViewState::new(smooth);
        state.update_content_size(200, 40);
        state.set_anchors(HashMap::from([
            (Anchor::WhatIDo, 20),
            (Anchor::HowIWork, 50),
            (Anchor::Systems, 90),
            (Anchor::Contact, 180),
        ]));
        state
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut state = laid_out(false);
        state.scroll_up(5);
        assert_eq!(state.offset, 0);

        state.scroll_down(1000);
        assert_eq!(state.offset, 160);

        state.scroll_to_top();
        state.page_down();
        assert_eq!(state.offset, 38);
        state.page_up();
        assert_eq!(state.offset, 0);

        state.scroll_to_bottom();
        assert_eq!(state.offset, state.max_offset());
    }

    #[test]
    fn test_content_shrink_clamps_offset() {
        let mut state = laid_out(false);
        state.scroll_to_bottom();
        state.update_content_size(60, 40);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_navigate_jumps_to_anchor_row() {
        let mut state = laid_out(false);
        assert_eq!(state.navigate_to("systems"), Some(Anchor::Systems));
        assert_eq!(state.offset, 90);

        assert_eq!(state.navigate_to("#how-i-work"), Some(Anchor::HowIWork));
        assert_eq!(state.offset, 50);
    }

    #[test]
    fn test_navigate_near_end_clamps_to_max_offset() {
        let mut state = laid_out(false);
        state.navigate_to("contact");
        assert_eq!(state.offset, 160);
    }

    #[test]
    fn test_navigate_to_unknown_anchor_is_noop() {
        let mut state = laid_out(true);
        state.scroll_down(7);

        assert_eq!(state.navigate_to("does-not-exist"), None);
        assert_eq!(state.offset, 7);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_smooth_navigation_eases_then_lands() {
        let mut state = laid_out(true);
        state.navigate_to("systems");
        assert_eq!(state.offset, 0);
        assert!(state.is_animating());

        let mut positions = Vec::new();
        for _ in 0..SMOOTH_SCROLL_TICKS {
            state.tick();
            positions.push(state.offset);
        }

        assert_eq!(state.offset, 90);
        assert!(!state.is_animating());
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
        // Ease-out covers more than half the distance in the first half
        assert!(positions[usize::from(SMOOTH_SCROLL_TICKS / 2) - 1] > 45);
    }

    #[test]
    fn test_smooth_navigation_upwards() {
        let mut state = laid_out(true);
        state.smooth_scroll = false;
        state.navigate_to("contact");
        state.smooth_scroll = true;

        state.navigate_to("what-i-do");
        for _ in 0..SMOOTH_SCROLL_TICKS {
            state.tick();
        }
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut state = laid_out(true);
        state.navigate_to("systems");
        state.tick();
        let offset = state.offset;

        state.scroll_down(1);
        assert!(!state.is_animating());
        assert_eq!(state.offset, offset + 1);
    }

    #[test]
    fn test_navigation_before_layout_resolves_on_first_layout() {
        let mut state = PageViewState::new(false);
        assert_eq!(state.navigate_to("how-i-work"), Some(Anchor::HowIWork));
        assert_eq!(state.offset, 0);

        state.update_content_size(200, 40);
        state.set_anchors(HashMap::from([(Anchor::HowIWork, 50)]));
        assert_eq!(state.offset, 50);
    }

    #[test]
    fn test_tick_without_animation_is_noop() {
        let mut state = laid_out(true);
        state.scroll_down(3);
        state.tick();
        assert_eq!(state.offset, 3);
    }
}
