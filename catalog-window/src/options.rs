use alloc::sync::Arc;

use crate::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_OVERSCAN, DebounceTimer, ViewportGeometry,
};

/// Called when the list scrolls near its end. The caller fetches the next page and eventually
/// supplies a longer collection.
pub type OnEndReachedCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::CatalogList`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct CatalogListOptions {
    pub geometry: ViewportGeometry,

    /// Extra rows rendered beyond each edge of the visible slice.
    pub overscan: usize,

    /// Fraction of the scroll height past which `on_end_reached` may fire.
    pub on_end_reached_threshold: f64,

    pub on_end_reached: Option<OnEndReachedCallback>,

    /// Inactivity delay after which `is_scrolling` settles back to `false`.
    pub is_scrolling_reset_delay_ms: u64,
}

impl CatalogListOptions {
    pub fn new(item_height: f64, container_height: f64) -> Self {
        Self {
            geometry: ViewportGeometry::new(item_height, container_height),
            overscan: DEFAULT_OVERSCAN,
            on_end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            on_end_reached: None,
            is_scrolling_reset_delay_ms: DebounceTimer::DEFAULT_DELAY_MS,
        }
    }

    pub fn with_geometry(mut self, geometry: ViewportGeometry) -> Self {
        self.geometry = geometry.sanitized();
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.on_end_reached_threshold = threshold;
        self
    }

    pub fn with_on_end_reached(
        mut self,
        on_end_reached: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_end_reached = on_end_reached.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl core::fmt::Debug for CatalogListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogListOptions")
            .field("geometry", &self.geometry)
            .field("overscan", &self.overscan)
            .field("on_end_reached_threshold", &self.on_end_reached_threshold)
            .field("on_end_reached", &self.on_end_reached.is_some())
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish()
    }
}
