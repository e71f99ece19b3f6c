use core::ops::RangeInclusive;

use crate::geometry::{ceil_count, floor_index, sanitize_extent, sanitize_offset};

/// Default number of rows rendered beyond each edge of the visible slice.
pub const DEFAULT_OVERSCAN: usize = 3;

/// An overscanned window of row indexes. All bounds are inclusive.
///
/// Invariant: `start <= visible_start <= visible_end <= end < item_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    /// First rendered index (overscan included).
    pub start: usize,
    /// Last rendered index (overscan included).
    pub end: usize,
    /// First index intersecting the viewport.
    pub visible_start: usize,
    /// Last index of the visible slice.
    pub visible_end: usize,
}

impl VisibleRange {
    /// Number of rendered indexes. Never zero.
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Maps a scroll position to the renderable window of a fixed-row-height list.
///
/// Returns `None` for an empty collection: there is no window to compute.
///
/// Out-of-range input is tolerated: a negative or NaN `scroll_top` counts as `0`, extents are
/// clamped to [`crate::MIN_EXTENT`], and a `scroll_top` past the end (host overscroll) still
/// yields indexes inside `[0, item_count - 1]`. Overscan is applied to the unclamped visible
/// slice, so overscrolling only loosens the window; the reported `visible_*` bounds are then
/// clamped into `[start, end]`.
pub fn calculate_visible_range(
    scroll_top: f64,
    container_height: f64,
    item_height: f64,
    item_count: usize,
    overscan: usize,
) -> Option<VisibleRange> {
    if item_count == 0 {
        return None;
    }

    let scroll_top = sanitize_offset(scroll_top);
    let item_height = sanitize_extent(item_height);
    let container_height = sanitize_extent(container_height);

    let visible_start = floor_index(scroll_top / item_height);
    let visible_count = ceil_count(container_height / item_height);
    let visible_end = visible_start.saturating_add(visible_count);

    let last = item_count - 1;
    let end = visible_end.saturating_add(overscan).min(last);
    let start = visible_start.saturating_sub(overscan).min(end);

    Some(VisibleRange {
        start,
        end,
        visible_start: visible_start.clamp(start, end),
        visible_end: visible_end.clamp(start, end),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RangeKey {
    scroll_top: u64,
    container_height: u64,
    item_height: u64,
    item_count: usize,
    overscan: usize,
}

/// Single-entry memo for [`calculate_visible_range`].
///
/// Re-renders that do not change any input (e.g. a scroll-activity flip or a parent update)
/// reuse the previous window instead of recomputing it.
#[derive(Clone, Debug, Default)]
pub struct RangeCache {
    last: Option<(RangeKey, Option<VisibleRange>)>,
    hits: u64,
    misses: u64,
}

impl RangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        scroll_top: f64,
        container_height: f64,
        item_height: f64,
        item_count: usize,
        overscan: usize,
    ) -> Option<VisibleRange> {
        let key = RangeKey {
            scroll_top: scroll_top.to_bits(),
            container_height: container_height.to_bits(),
            item_height: item_height.to_bits(),
            item_count,
            overscan,
        };
        if let Some((cached_key, range)) = &self.last {
            if *cached_key == key {
                self.hits = self.hits.saturating_add(1);
                return *range;
            }
        }

        self.misses = self.misses.saturating_add(1);
        let range = calculate_visible_range(
            scroll_top,
            container_height,
            item_height,
            item_count,
            overscan,
        );
        self.last = Some((key, range));
        range
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
