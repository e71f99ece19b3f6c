//! Visibility-gated mounting for `catalog-window` rows.
//!
//! The `catalog-window` crate decides *which* rows exist. This crate decides when a mounted row
//! may do its expensive work (image decode, layout): a row starts as a placeholder, is observed
//! for viewport intersection, and is promoted exactly once when it first intersects. Promotion
//! is permanent for the row's mounted lifetime and releases the observer.
//!
//! - [`IntersectionObserver`] is the seam to a native viewport-intersection primitive.
//! - [`ManualObserver`] is a hand-driven fake for harnesses without a real viewport.
//! - [`GeometryObserver`] computes intersections from fixed-row-height layout.
//! - [`GateSet`] owns the gates of every mounted row of one list.
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod content;
mod gate;
mod gate_set;
mod geometry_observer;
mod key;
mod observer;

#[cfg(test)]
mod tests;

pub use content::{ContentState, Display, ItemMount};
pub use gate::{DEFAULT_ROOT_MARGIN, GateOptions, GateState, VisibilityGate};
pub use gate_set::{GateSet, OnVisibleCallback};
pub use geometry_observer::GeometryObserver;
pub use key::GateKey;
pub use observer::{IntersectionEntry, IntersectionObserver, ManualObserver};
