use core::cmp::Ordering;

use crate::ScrollDirection;
use crate::geometry::sanitize_offset;
use crate::timer::{DebounceTimer, TimerToken};

/// Owns the scroll state of one list instance.
///
/// Translates host scroll events into a scroll offset plus an `is_scrolling` flag that settles
/// after a debounce delay of inactivity. The flag is a cosmetic cue only; nothing in the
/// windowing math depends on it.
#[derive(Clone, Debug)]
pub struct ViewportController {
    scroll_top: f64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    item_count: usize,
    timer: DebounceTimer,
    mounted: bool,
}

impl ViewportController {
    pub fn new(is_scrolling_reset_delay_ms: u64) -> Self {
        Self {
            scroll_top: 0.0,
            is_scrolling: false,
            scroll_direction: None,
            item_count: 0,
            timer: DebounceTimer::new(is_scrolling_reset_delay_ms),
            mounted: true,
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Item count seen by the last [`Self::sync_item_count`].
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn timer(&self) -> &DebounceTimer {
        &self.timer
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.timer.set_delay_ms(delay_ms);
    }

    /// Applies a scroll event from the host and (re)arms the settle timer.
    ///
    /// Returns the live timer token, or `None` once unmounted.
    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) -> Option<TimerToken> {
        if !self.mounted {
            wwarn!(scroll_top, "ViewportController: scroll event after unmount");
            return None;
        }
        if scroll_top.is_nan() || scroll_top < 0.0 {
            wwarn!(scroll_top, "ViewportController: scroll_top clamped");
        }
        let scroll_top = sanitize_offset(scroll_top);
        wtrace!(scroll_top, now_ms, "ViewportController::on_scroll");

        self.scroll_direction = match scroll_top.partial_cmp(&self.scroll_top) {
            Some(Ordering::Greater) => Some(ScrollDirection::Forward),
            Some(Ordering::Less) => Some(ScrollDirection::Backward),
            _ => self.scroll_direction,
        };
        self.scroll_top = scroll_top;
        self.is_scrolling = true;
        Some(self.timer.restart(now_ms))
    }

    /// Host-timer path: settles scroll activity if `token` is still the live arming.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if !self.timer.fire(token) {
            return false;
        }
        self.settle();
        true
    }

    /// Polling path: settles scroll activity once the debounce deadline has passed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.timer.poll(now_ms) {
            return false;
        }
        self.settle();
        true
    }

    /// Records the current item count.
    ///
    /// When the collection goes from non-empty to empty, the scroll offset is reset to `0` so
    /// the next non-empty render starts from the top. Returns `true` when that reset happened.
    pub fn sync_item_count(&mut self, item_count: usize) -> bool {
        let prev = self.item_count;
        self.item_count = item_count;
        if prev > 0 && item_count == 0 {
            wdebug!(prev, "ViewportController: collection emptied, scroll reset");
            self.scroll_top = 0.0;
            self.scroll_direction = None;
            return true;
        }
        false
    }

    /// Moves the scroll offset without marking the list as scrolling.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = sanitize_offset(scroll_top);
    }

    /// Overrides the scroll-activity flag. Clearing it also disarms the settle timer.
    pub fn set_is_scrolling(&mut self, is_scrolling: bool, now_ms: u64) {
        if is_scrolling {
            self.is_scrolling = true;
            self.timer.restart(now_ms);
        } else {
            self.timer.cancel();
            self.settle();
        }
    }

    /// Tears the controller down: the pending settle timer is cancelled and later events are
    /// ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if self.timer.cancel() {
            wdebug!("ViewportController::unmount: pending settle timer cancelled");
        }
        self.mounted = false;
        self.is_scrolling = false;
        self.scroll_direction = None;
    }

    fn settle(&mut self) {
        self.is_scrolling = false;
        self.scroll_direction = None;
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(DebounceTimer::DEFAULT_DELAY_MS)
    }
}
