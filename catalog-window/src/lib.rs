//! A headless windowing engine for long, fixed-row-height catalogs.
//!
//! For visibility-gated mounting of expensive row content, see the `catalog-window-adapter`
//! crate.
//!
//! This crate covers the "render only what is seen" half of a progressive rendering pipeline:
//! mapping a scroll position to an overscanned index window, settling scroll activity with a
//! debounce timer, positioning the rendered block inside a full-height spacer, and firing an
//! at-most-once-per-advance "end reached" callback for infinite scrolling.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - row height and container height
//! - scroll events (offset, scroll height, client height)
//! - a clock (`now_ms`) or real timers for scroll settling
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod list;
mod options;
mod pagination;
mod phase;
mod range;
mod state;
mod timer;
mod types;
mod viewport;
mod window;


pub use geometry::{MIN_EXTENT, ViewportGeometry};
pub use list::{CatalogList, ListFrame};
pub use options::{CatalogListOptions, OnEndReachedCallback};
pub use pagination::{
    DEFAULT_END_REACHED_THRESHOLD, PaginationCursor, PaginationTrigger, ScrollEvent,
};
pub use phase::ListPhase;
pub use range::{DEFAULT_OVERSCAN, RangeCache, VisibleRange, calculate_visible_range};
pub use state::{ListState, ScrollState};
pub use timer::{DebounceTimer, TimerToken};
pub use types::{Align, ScrollDirection};
pub use viewport::ViewportController;
pub use window::{
    Collection, RenderedItem, Window, WindowLayout, for_each_window_item, render_window,
};
