use crate::{
    Align, CatalogListOptions, Collection, ListPhase, ListState, PaginationCursor,
    PaginationTrigger, RangeCache, ScrollDirection, ScrollEvent, ScrollState, TimerToken,
    ViewportController, VisibleRange, Window, calculate_visible_range, render_window,
};

/// What a list shows for one render.
#[derive(Clone, Debug, PartialEq)]
pub enum ListFrame<K, R> {
    /// Show the loading presentation; no window was computed.
    Loading,
    /// Show the empty presentation; no window was computed.
    Empty,
    Populated {
        window: Window<K, R>,
        /// Show a trailing "loading more" indicator after the rows.
        paginating: bool,
    },
}

impl<K, R> ListFrame<K, R> {
    pub fn phase(&self) -> ListPhase {
        match self {
            Self::Loading => ListPhase::Loading,
            Self::Empty => ListPhase::Empty,
            Self::Populated { paginating, .. } => ListPhase::Populated {
                paginating: *paginating,
            },
        }
    }

    pub fn window(&self) -> Option<&Window<K, R>> {
        match self {
            Self::Populated { window, .. } => Some(window),
            _ => None,
        }
    }
}

/// One windowed catalog list instance.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the host scroll container reports a scroll
/// - `tick(now_ms)` each frame, or `on_timer(token)` from a real timer, to settle `is_scrolling`
/// - `render` whenever the collection or loading flag may have changed
/// - `unmount` on teardown
///
/// Data flows one way: collection + geometry -> range -> window, with pagination fired as a
/// side effect of scroll events.
#[derive(Clone, Debug)]
pub struct CatalogList {
    options: CatalogListOptions,
    viewport: ViewportController,
    pagination: PaginationTrigger,
    ranges: RangeCache,
}

impl CatalogList {
    pub fn new(options: CatalogListOptions) -> Self {
        let mut options = options;
        options.geometry = options.geometry.sanitized();
        wdebug!(
            item_height = options.geometry.item_height,
            container_height = options.geometry.container_height,
            overscan = options.overscan,
            "CatalogList::new"
        );
        Self {
            viewport: ViewportController::new(options.is_scrolling_reset_delay_ms),
            pagination: PaginationTrigger::new(options.on_end_reached_threshold),
            ranges: RangeCache::new(),
            options,
        }
    }

    pub fn options(&self) -> &CatalogListOptions {
        &self.options
    }

    /// Replaces the options. Scroll state and pagination progress are kept.
    pub fn set_options(&mut self, options: CatalogListOptions) {
        let mut options = options;
        options.geometry = options.geometry.sanitized();
        self.viewport
            .set_is_scrolling_reset_delay_ms(options.is_scrolling_reset_delay_ms);
        self.pagination.set_threshold(options.on_end_reached_threshold);
        self.options = options;
        wtrace!(
            overscan = self.options.overscan,
            threshold = self.pagination.threshold(),
            "CatalogList::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CatalogListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn scroll_top(&self) -> f64 {
        self.viewport.scroll_top()
    }

    pub fn is_scrolling(&self) -> bool {
        self.viewport.is_scrolling()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.viewport.scroll_direction()
    }

    /// Item count seen by the last `render`.
    pub fn item_count(&self) -> usize {
        self.viewport.item_count()
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_mounted()
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn total_height(&self) -> f64 {
        self.options.geometry.total_height(self.item_count())
    }

    pub fn max_scroll_top(&self) -> f64 {
        self.options.geometry.max_scroll_top(self.item_count())
    }

    /// Applies a scroll event: updates the scroll state, then checks pagination.
    ///
    /// Returns the live settle-timer token for hosts that schedule real timers, or `None` once
    /// unmounted.
    pub fn on_scroll(&mut self, event: ScrollEvent, now_ms: u64) -> Option<TimerToken> {
        let token = self.viewport.on_scroll(event.scroll_top, now_ms)?;
        if let Some(on_end_reached) = &self.options.on_end_reached {
            let item_count = self.viewport.item_count();
            self.pagination
                .on_scroll(&event, item_count, || on_end_reached());
        }
        Some(token)
    }

    /// Like [`Self::on_scroll`], deriving scroll and client heights from the row geometry.
    pub fn on_scroll_offset(&mut self, scroll_top: f64, now_ms: u64) -> Option<TimerToken> {
        let event = ScrollEvent::from_layout(scroll_top, self.item_count(), self.options.geometry);
        self.on_scroll(event, now_ms)
    }

    /// Polling path for scroll settling. Returns `true` when `is_scrolling` just settled.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.viewport.tick(now_ms)
    }

    /// Host-timer path for scroll settling. Stale tokens are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        self.viewport.on_timer(token)
    }

    /// Produces the frame for the current collection.
    ///
    /// `key_extractor` and `render_item` run once per defined row inside the window; they are not
    /// called at all for `Loading`/`Empty` frames.
    pub fn render<C, K, R>(
        &mut self,
        items: &C,
        loading: bool,
        key_extractor: impl FnMut(&C::Item, usize) -> K,
        render_item: impl FnMut(&C::Item, usize) -> R,
    ) -> ListFrame<K, R>
    where
        C: Collection + ?Sized,
    {
        let item_count = items.len();
        if self.viewport.sync_item_count(item_count) {
            self.pagination.reset();
        }

        match ListPhase::resolve(item_count, loading) {
            ListPhase::Loading => ListFrame::Loading,
            ListPhase::Empty => ListFrame::Empty,
            ListPhase::Populated { paginating } => {
                // Only an empty collection yields no range.
                let Some(range) = self.cached_range(item_count) else {
                    return ListFrame::Empty;
                };
                let window = render_window(
                    items,
                    range,
                    self.options.geometry.item_height,
                    self.viewport.is_scrolling(),
                    key_extractor,
                    render_item,
                );
                ListFrame::Populated { window, paginating }
            }
        }
    }

    /// Window for the current scroll offset and the last rendered item count.
    pub fn visible_range(&mut self) -> Option<VisibleRange> {
        self.cached_range(self.item_count())
    }

    /// Window for an arbitrary scroll offset, without touching the cache.
    pub fn visible_range_for(&self, scroll_top: f64) -> Option<VisibleRange> {
        let g = self.options.geometry;
        calculate_visible_range(
            scroll_top,
            g.container_height,
            g.item_height,
            self.item_count(),
            self.options.overscan,
        )
    }

    pub fn range_cache(&self) -> &RangeCache {
        &self.ranges
    }

    /// Computes the scroll offset that brings `index` into view with the given alignment.
    ///
    /// The result is clamped to `[0, max_scroll_top]`; out-of-bounds indexes are clamped to the
    /// last row.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        let count = self.item_count();
        if count == 0 {
            return 0.0;
        }
        let g = self.options.geometry;
        let index = index.min(count - 1);
        let top = g.item_top(index);
        let bottom = top + g.item_height;
        let view = g.container_height;
        let current = self.viewport.scroll_top();

        let target = match align {
            Align::Start => top,
            Align::End => bottom - view,
            Align::Center => top + g.item_height / 2.0 - view / 2.0,
            Align::Auto => {
                if top >= current && bottom <= current + view {
                    current
                } else if top < current {
                    top
                } else {
                    bottom - view
                }
            }
        };
        target.clamp(0.0, self.max_scroll_top())
    }

    /// Moves the scroll offset programmatically (no scroll activity, no pagination check).
    pub fn scroll_to_offset(&mut self, scroll_top: f64) {
        self.viewport.set_scroll_top(scroll_top);
    }

    pub fn pagination_cursor(&self) -> PaginationCursor {
        self.pagination.cursor()
    }

    /// Re-arms pagination from the top.
    ///
    /// The trigger compares raw scroll offsets, so a host that rewinds the scroll position while
    /// more pages remain should call this to fire again before passing the old trigger point.
    pub fn reset_pagination(&mut self) {
        wdebug!("CatalogList::reset_pagination");
        self.pagination.reset();
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            scroll_top: self.viewport.scroll_top(),
            is_scrolling: self.viewport.is_scrolling(),
        }
    }

    pub fn list_state(&self) -> ListState {
        ListState {
            scroll: self.scroll_state(),
            pagination: self.pagination.cursor(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// When `state.scroll.is_scrolling` is `true`, the settle timer is armed as if a scroll event
    /// happened at `now_ms`.
    pub fn restore_list_state(&mut self, state: ListState, now_ms: u64) {
        self.viewport.set_scroll_top(state.scroll.scroll_top);
        self.viewport
            .set_is_scrolling(state.scroll.is_scrolling, now_ms);
        self.pagination.restore_cursor(state.pagination);
    }

    /// Tears the list down. The pending settle timer is cancelled; later scroll and timer
    /// events are no-ops.
    pub fn unmount(&mut self) {
        self.viewport.unmount();
    }

    fn cached_range(&mut self, item_count: usize) -> Option<VisibleRange> {
        let g = self.options.geometry;
        self.ranges.get_or_compute(
            self.viewport.scroll_top(),
            g.container_height,
            g.item_height,
            item_count,
            self.options.overscan,
        )
    }
}
