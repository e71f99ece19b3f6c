// Example: window a large catalog and position the rendered block.
use catalog_window::{CatalogList, CatalogListOptions, ListFrame, ScrollEvent};

fn main() {
    let items: Vec<String> = (0..100_000).map(|i| format!("listing #{i}")).collect();
    let mut list = CatalogList::new(CatalogListOptions::new(48.0, 720.0));

    list.render(&items, false, |_, i| i, |item, _| item.clone());
    list.on_scroll(ScrollEvent::new(123_456.0, list.total_height(), 720.0), 0);

    match list.render(&items, false, |_, i| i, |item, _| item.clone()) {
        ListFrame::Populated { window, .. } => {
            println!("total_height={}", window.layout.total_height);
            println!("offset_y={}", window.layout.offset_y);
            println!("range={:?}", window.range);
            println!("first={:?}", window.items.first().map(|it| &it.content));
            println!("dimmed={}", window.dimmed);
        }
        other => println!("phase={:?}", other.phase()),
    }

    list.tick(150);
    println!("is_scrolling after settle={}", list.is_scrolling());
}
