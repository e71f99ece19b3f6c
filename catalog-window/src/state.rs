use crate::PaginationCursor;

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub scroll_top: f64,
    pub is_scrolling: bool,
}

/// Scroll state plus pagination progress of one list instance.
///
/// Useful for restoring a catalog position across navigation without re-firing pagination for
/// pages that were already requested.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub scroll: ScrollState,
    pub pagination: PaginationCursor,
}
