/// Smallest row or container extent the engine works with, in host pixels.
///
/// Non-positive and non-finite extents are clamped up to this value.
pub const MIN_EXTENT: f64 = 1.0;

/// Fixed-row-height geometry of a single list instance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    /// Height of every row.
    pub item_height: f64,
    /// Height of the scroll container's visible area.
    pub container_height: f64,
}

impl ViewportGeometry {
    /// Creates a geometry, clamping both extents to at least [`MIN_EXTENT`].
    pub fn new(item_height: f64, container_height: f64) -> Self {
        if !(item_height >= MIN_EXTENT && item_height.is_finite()) {
            wwarn!(item_height, "ViewportGeometry: item_height clamped");
        }
        if !(container_height >= MIN_EXTENT && container_height.is_finite()) {
            wwarn!(container_height, "ViewportGeometry: container_height clamped");
        }
        Self {
            item_height: sanitize_extent(item_height),
            container_height: sanitize_extent(container_height),
        }
    }

    /// Returns a copy with both extents clamped, for values built by struct literal or
    /// deserialization.
    pub fn sanitized(self) -> Self {
        Self {
            item_height: sanitize_extent(self.item_height),
            container_height: sanitize_extent(self.container_height),
        }
    }

    /// Height of the full collection: the spacer that sizes the native scrollbar.
    pub fn total_height(&self, item_count: usize) -> f64 {
        item_count as f64 * sanitize_extent(self.item_height)
    }

    /// Largest meaningful scroll offset for `item_count` rows.
    pub fn max_scroll_top(&self, item_count: usize) -> f64 {
        let max = self.total_height(item_count) - sanitize_extent(self.container_height);
        if max > 0.0 { max } else { 0.0 }
    }

    /// Absolute top of row `index`.
    pub fn item_top(&self, index: usize) -> f64 {
        index as f64 * sanitize_extent(self.item_height)
    }
}

pub(crate) fn sanitize_extent(v: f64) -> f64 {
    if v == f64::INFINITY {
        f64::MAX
    } else if v >= MIN_EXTENT {
        v
    } else {
        // NaN lands here too.
        MIN_EXTENT
    }
}

pub(crate) fn sanitize_offset(v: f64) -> f64 {
    if v == f64::INFINITY {
        f64::MAX
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// `floor(x)` for non-negative `x`, saturating at `usize::MAX`.
///
/// Float-to-int `as` casts truncate toward zero and saturate, which is `floor` on this domain
/// and keeps the crate free of `std` float intrinsics.
pub(crate) fn floor_index(x: f64) -> usize {
    debug_assert!(!(x < 0.0), "floor_index expects a non-negative value (x={x})");
    x as usize
}

/// `ceil(x)` for non-negative `x`, saturating at `usize::MAX`.
pub(crate) fn ceil_count(x: f64) -> usize {
    let t = floor_index(x);
    if (t as f64) < x { t.saturating_add(1) } else { t }
}
