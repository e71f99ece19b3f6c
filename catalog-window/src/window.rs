use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::VisibleRange;
use crate::geometry::sanitize_extent;

/// An ordered, index-addressable collection owned by the caller.
///
/// The engine only reads `len` and indexed access. `get` may return `None` for an index below
/// `len` (e.g. a paged store with a hole, or a window computed against a stale count); such
/// slots are skipped.
pub trait Collection {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<&Self::Item> {
        (**self).get(index)
    }
}

/// Placement of the rendered block inside the full-height spacer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowLayout {
    /// Translation of the rendered block from the top of the spacer: `start * item_height`.
    pub offset_y: f64,
    /// Height of the spacer: `item_count * item_height`. This is what keeps the native
    /// scrollbar sized for the whole collection.
    pub total_height: f64,
    pub item_height: f64,
}

impl WindowLayout {
    pub fn new(range: &VisibleRange, item_count: usize, item_height: f64) -> Self {
        let item_height = sanitize_extent(item_height);
        Self {
            offset_y: range.start as f64 * item_height,
            total_height: item_count as f64 * item_height,
            item_height,
        }
    }

    /// Absolute top of row `index` inside the spacer.
    pub fn item_top(&self, index: usize) -> f64 {
        index as f64 * self.item_height
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedItem<K, R> {
    pub key: K,
    pub index: usize,
    pub content: R,
}

/// The materialized slice of a list for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Window<K, R> {
    pub range: VisibleRange,
    pub layout: WindowLayout,
    /// Rendered rows, ascending by index.
    pub items: Vec<RenderedItem<K, R>>,
    /// Cosmetic de-emphasis while the list is scrolling. Never delays mounting.
    pub dimmed: bool,
}

impl<K, R> Window<K, R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items.iter().map(|it| &it.key)
    }

    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|it| it.index)
    }
}

/// Visits every defined item in `range`, ascending by index.
///
/// Slots where `items.get(i)` is `None` are skipped.
pub fn for_each_window_item<C: Collection + ?Sized>(
    items: &C,
    range: &VisibleRange,
    mut f: impl FnMut(usize, &C::Item),
) {
    for i in range.indices() {
        match items.get(i) {
            Some(item) => f(i, item),
            None => {
                wtrace!(index = i, len = items.len(), "window slot has no item, skipped");
            }
        }
    }
}

/// Materializes the rows in `range`.
///
/// `key_extractor` and `render_item` are each called once per defined row, in ascending index
/// order. Panics from either propagate to the caller.
pub fn render_window<C, K, R>(
    items: &C,
    range: VisibleRange,
    item_height: f64,
    dimmed: bool,
    mut key_extractor: impl FnMut(&C::Item, usize) -> K,
    mut render_item: impl FnMut(&C::Item, usize) -> R,
) -> Window<K, R>
where
    C: Collection + ?Sized,
{
    let layout = WindowLayout::new(&range, items.len(), item_height);
    let mut out = Vec::with_capacity(range.count());
    for_each_window_item(items, &range, |index, item| {
        out.push(RenderedItem {
            key: key_extractor(item, index),
            index,
            content: render_item(item, index),
        });
    });
    Window {
        range,
        layout,
        items: out,
        dimmed,
    }
}
