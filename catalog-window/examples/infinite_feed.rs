// Example: infinite scrolling driven by the end-reached trigger.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use catalog_window::{CatalogList, CatalogListOptions, ListFrame};

const PAGE: u32 = 40;

fn main() {
    let wants_page = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&wants_page);
    let mut list = CatalogList::new(
        CatalogListOptions::new(60.0, 600.0)
            .with_on_end_reached(Some(move || flag.store(true, Ordering::SeqCst))),
    );

    let mut items: Vec<u32> = Vec::new();
    let mut loading = true;
    let mut now_ms = 0u64;

    // First page arrives.
    print_frame(&list.render(&items, loading, |it, _| *it, |it, _| *it));
    items.extend(0..PAGE);
    loading = false;

    for step in 0..40 {
        now_ms += 16;
        list.render(&items, loading, |it, _| *it, |it, _| *it);
        let next = list.scroll_top() + 120.0;
        list.on_scroll_offset(next.min(list.max_scroll_top()), now_ms);
        list.tick(now_ms);

        if wants_page.swap(false, Ordering::SeqCst) {
            let start = items.len() as u32;
            println!("step {step}: end reached at {}, fetching", list.scroll_top());
            items.extend(start..start + PAGE);
        }
    }

    print_frame(&list.render(&items, loading, |it, _| *it, |it, _| *it));
}

fn print_frame(frame: &ListFrame<u32, u32>) {
    match frame {
        ListFrame::Loading => println!("loading..."),
        ListFrame::Empty => println!("no listings"),
        ListFrame::Populated { window, paginating } => println!(
            "rows {}..={} of {} (paginating={paginating})",
            window.range.start,
            window.range.end,
            window.layout.total_height / window.layout.item_height
        ),
    }
}
