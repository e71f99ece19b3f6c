// Example: gate thumbnail loads on viewport intersection while scrolling a catalog.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog_window::{CatalogList, CatalogListOptions, ListFrame};
use catalog_window_adapter::{Display, GateOptions, GateSet, GeometryObserver};

fn main() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);
    let options = GateOptions::default().with_root_margin(100.0);
    let mut gates = GateSet::new(options).with_on_visible(Some(move |_: &u64| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let mut observer = GeometryObserver::new(&options);

    let listings: Vec<u64> = (0..10_000).map(|i| 90_000 + i).collect();
    let mut list = CatalogList::new(CatalogListOptions::new(80.0, 640.0));

    for (now_ms, offset) in [(0u64, 0.0), (16, 400.0), (32, 2_400.0), (48, 2_480.0)] {
        list.on_scroll_offset(offset, now_ms);
        let ListFrame::Populated { window, .. } =
            list.render(&listings, false, |sku, _| *sku, |sku, _| *sku)
        else {
            continue;
        };

        gates.sync_window(window.keys().copied(), &mut observer);
        for row in &window.items {
            observer.place(
                &row.key,
                window.layout.item_top(row.index),
                window.layout.item_height,
            );
        }
        let entries = observer.update(list.scroll_top(), 640.0);
        gates.dispatch(entries, &mut observer);

        // Pretend every other thumbnail fails to decode.
        for row in &window.items {
            let should_load = gates.get(&row.key).is_some_and(|m| m.should_load());
            if should_load {
                if row.key % 2 == 0 {
                    gates.on_content_loaded(&row.key);
                } else {
                    gates.on_content_error(&row.key, &mut observer);
                }
            }
        }

        let placeholders = window
            .items
            .iter()
            .filter(|row| gates.display(&row.key) == Some(Display::Placeholder))
            .count();
        println!(
            "offset={offset} rows={}..={} mounted={} placeholders={placeholders} thumbnails_requested={}",
            window.range.start,
            window.range.end,
            gates.len(),
            loads.load(Ordering::SeqCst)
        );
    }
}
