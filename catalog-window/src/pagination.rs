use crate::ViewportGeometry;
use crate::geometry::sanitize_offset;

/// Default fraction of the scroll height past which `on_end_reached` may fire.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.8;

/// A scroll event as reported by the host scroll container.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub scroll_top: f64,
    /// Full scrollable extent (content height).
    pub scroll_height: f64,
    /// Visible extent of the container.
    pub client_height: f64,
}

impl ScrollEvent {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Derives the heights from the fixed-row-height layout, for hosts that only report the
    /// scroll offset.
    pub fn from_layout(scroll_top: f64, item_count: usize, geometry: ViewportGeometry) -> Self {
        let geometry = geometry.sanitized();
        Self {
            scroll_top,
            scroll_height: geometry.total_height(item_count),
            client_height: geometry.container_height,
        }
    }
}

/// High-water mark of the scroll offset at which `on_end_reached` last fired.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationCursor {
    pub last_triggered_scroll_top: f64,
}

/// Fires an "end reached" callback at most once per forward advance past a threshold.
///
/// A fire is eligible when `scroll_top + client_height >= scroll_height * threshold` and the
/// offset is strictly past the last trigger point. There is no backward re-arm: crossing the
/// threshold again without exceeding the last trigger point does nothing. Loading the next page
/// grows `scroll_height`, which pushes the threshold out and lets the next forward advance fire.
#[derive(Clone, Debug)]
pub struct PaginationTrigger {
    threshold: f64,
    cursor: PaginationCursor,
}

impl PaginationTrigger {
    /// `threshold` is a fraction of the scroll height; non-finite values fall back to
    /// [`DEFAULT_END_REACHED_THRESHOLD`], the rest is clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            cursor: PaginationCursor::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = sanitize_threshold(threshold);
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    pub fn restore_cursor(&mut self, cursor: PaginationCursor) {
        self.cursor = PaginationCursor {
            last_triggered_scroll_top: sanitize_offset(cursor.last_triggered_scroll_top),
        };
    }

    /// Re-arms the trigger from the top.
    pub fn reset(&mut self) {
        self.cursor = PaginationCursor::default();
    }

    /// Whether `event` would fire, without advancing the cursor.
    pub fn is_eligible(&self, event: &ScrollEvent, item_count: usize) -> bool {
        if item_count == 0 {
            return false;
        }
        let scroll_top = sanitize_offset(event.scroll_top);
        let limit = sanitize_offset(event.scroll_height) * self.threshold;
        scroll_top + sanitize_offset(event.client_height) >= limit
            && scroll_top > self.cursor.last_triggered_scroll_top
    }

    /// Checks `event` and, when eligible, calls `on_end_reached` and advances the cursor.
    ///
    /// Returns `true` when the callback ran.
    pub fn on_scroll(
        &mut self,
        event: &ScrollEvent,
        item_count: usize,
        on_end_reached: impl FnOnce(),
    ) -> bool {
        if !self.is_eligible(event, item_count) {
            return false;
        }
        let scroll_top = sanitize_offset(event.scroll_top);
        wtrace!(
            scroll_top,
            scroll_height = event.scroll_height,
            last = self.cursor.last_triggered_scroll_top,
            "PaginationTrigger: end reached"
        );
        self.cursor.last_triggered_scroll_top = scroll_top;
        on_end_reached();
        true
    }
}

impl Default for PaginationTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_END_REACHED_THRESHOLD)
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if !threshold.is_finite() {
        wwarn!(threshold, "PaginationTrigger: non-finite threshold, using default");
        return DEFAULT_END_REACHED_THRESHOLD;
    }
    threshold.clamp(0.0, 1.0)
}
