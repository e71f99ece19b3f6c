use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use catalog_window::{CatalogList, CatalogListOptions, ListFrame};

#[test]
fn gate_promotes_once_and_detaches() {
    let mut obs = ManualObserver::new();
    let mut gate = VisibilityGate::new(7u32, GateOptions::default());
    assert_eq!(gate.state(), GateState::Unmounted);
    assert_eq!(gate.mount(&mut obs), GateState::Observing);
    assert!(obs.is_observing(&7));

    let mut seen = Vec::new();
    let leave = obs.leave(&7).unwrap();
    assert!(!gate.handle(&leave, &mut obs, |id| seen.push(*id)));

    let hit = obs.intersect(&7, 0.25).unwrap();
    assert!(gate.handle(&hit, &mut obs, |id| seen.push(*id)));
    assert_eq!(seen, [7]);
    assert!(gate.is_promoted());
    assert!(!gate.is_attached());
    assert!(!obs.is_observing(&7));
    assert_eq!(obs.unobserve_calls(), 1);

    // The observer no longer reports, and stale reports are ignored.
    assert_eq!(obs.intersect(&7, 1.0), None);
    assert!(!gate.handle(&hit, &mut obs, |id| seen.push(*id)));
    assert!(!gate.handle(&leave, &mut obs, |id| seen.push(*id)));
    assert_eq!(gate.state(), GateState::Promoted);
    assert_eq!(seen, [7]);
}

#[test]
fn promotion_waits_for_threshold_across_toggles() {
    let mut obs = ManualObserver::new();
    let mut gate = VisibilityGate::new(1u32, GateOptions::default().with_threshold(0.5));
    gate.mount(&mut obs);

    let mut fired = 0usize;
    let partial = obs.intersect(&1, 0.2).unwrap();
    assert!(partial.is_intersecting);
    assert!(!gate.handle(&partial, &mut obs, |_| fired += 1));
    let gone = obs.leave(&1).unwrap();
    assert!(!gate.handle(&gone, &mut obs, |_| fired += 1));
    let half = obs.intersect(&1, 0.6).unwrap();
    assert!(gate.handle(&half, &mut obs, |_| fired += 1));
    assert!(!gate.handle(&gone, &mut obs, |_| fired += 1));
    assert!(!gate.handle(&half, &mut obs, |_| fired += 1));
    assert_eq!(fired, 1);
}

#[test]
fn disabled_gate_mounts_promoted_without_observing() {
    let mut obs = ManualObserver::new();
    let mut gate = VisibilityGate::new(3u32, GateOptions::default().with_enabled(false));
    assert_eq!(gate.mount(&mut obs), GateState::Promoted);
    assert_eq!(obs.observe_calls(), 0);

    let entry = IntersectionEntry {
        target: 3u32,
        is_intersecting: true,
        ratio: 1.0,
    };
    let mut fired = 0usize;
    assert!(!gate.handle(&entry, &mut obs, |_| fired += 1));
    assert_eq!(fired, 0);
}

#[test]
fn gate_ignores_reports_for_other_targets() {
    let mut obs = ManualObserver::new();
    let mut gate = VisibilityGate::new(1u32, GateOptions::default());
    gate.mount(&mut obs);
    let other = IntersectionEntry {
        target: 2u32,
        is_intersecting: true,
        ratio: 1.0,
    };
    assert!(!gate.handle(&other, &mut obs, |_| {}));
    assert_eq!(gate.state(), GateState::Observing);
}

#[test]
fn unmount_detaches_and_remount_starts_a_new_lifetime() {
    let mut obs = ManualObserver::new();
    let mut gate = VisibilityGate::new(5u32, GateOptions::default());
    let mut fired = 0usize;

    gate.mount(&mut obs);
    gate.unmount(&mut obs);
    assert_eq!(gate.state(), GateState::Unmounted);
    assert!(!obs.is_observing(&5));
    assert_eq!(obs.unobserve_calls(), 1);

    gate.mount(&mut obs);
    let hit = obs.intersect(&5, 1.0).unwrap();
    assert!(gate.handle(&hit, &mut obs, |_| fired += 1));
    // Unmounting a promoted gate has nothing left to detach.
    gate.unmount(&mut obs);
    assert_eq!(obs.unobserve_calls(), 2);

    gate.mount(&mut obs);
    let hit = obs.intersect(&5, 1.0).unwrap();
    assert!(gate.handle(&hit, &mut obs, |_| fired += 1));
    assert_eq!(fired, 2);
}

#[test]
fn options_are_sanitized() {
    let o = GateOptions::default()
        .with_threshold(3.0)
        .with_root_margin(f64::NAN);
    assert_eq!(o.threshold, 1.0);
    assert_eq!(o.root_margin, DEFAULT_ROOT_MARGIN);
    assert_eq!(GateOptions::default().with_threshold(f64::NAN).threshold, 0.0);
}

#[test]
fn item_mount_display_follows_gate_and_content() {
    let mut obs = ManualObserver::new();
    let mut item = ItemMount::new(9u32, GateOptions::default());
    item.mount(&mut obs);
    assert_eq!(item.display(), Display::Placeholder);
    assert!(!item.should_load());

    let hit = obs.intersect(&9, 1.0).unwrap();
    assert!(item.handle(&hit, &mut obs, |_| {}));
    assert_eq!(item.display(), Display::Content);
    assert!(item.should_load());

    item.on_content_loaded();
    assert_eq!(item.content(), ContentState::Loaded);
    assert!(!item.should_load());
    assert_eq!(item.display(), Display::Content);

    item.on_content_error(&mut obs);
    assert_eq!(item.display(), Display::Fallback);
    item.on_content_loaded();
    assert_eq!(item.content(), ContentState::Errored);
    assert_eq!(item.display(), Display::Fallback);
}

#[test]
fn content_error_before_promotion_releases_observer() {
    let mut obs = ManualObserver::new();
    let mut item = ItemMount::new(4u32, GateOptions::default());
    item.mount(&mut obs);

    item.on_content_error(&mut obs);
    assert!(!obs.is_observing(&4));
    assert_eq!(item.display(), Display::Fallback);

    let entry = IntersectionEntry {
        target: 4u32,
        is_intersecting: true,
        ratio: 1.0,
    };
    let mut fired = 0usize;
    assert!(!item.handle(&entry, &mut obs, |_| fired += 1));
    assert_eq!(fired, 0);

    item.unmount(&mut obs);
    assert_eq!(obs.unobserve_calls(), 1);
    assert_eq!(item.content(), ContentState::Pending);
}

#[test]
fn gate_set_follows_window_and_reports_promotions() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&seen);
    let mut gates = GateSet::new(GateOptions::default())
        .with_on_visible(Some(move |id: &String| sink.lock().unwrap().push(id.clone())));
    let mut obs = ManualObserver::new();

    let a = String::from("a");
    let b = String::from("b");
    let c = String::from("c");
    let d = String::from("d");

    assert_eq!(
        gates.sync_window([a.clone(), b.clone(), c.clone()], &mut obs),
        (3, 0)
    );
    assert_eq!(obs.observed(), [a.clone(), b.clone(), c.clone()]);

    let entries: Vec<_> = [obs.intersect(&a, 1.0), obs.intersect(&b, 0.5), obs.leave(&c)]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(gates.dispatch(entries.clone(), &mut obs), 2);
    assert_eq!(*seen.lock().unwrap(), ["a", "b"]);
    assert_eq!(gates.dispatch(entries, &mut obs), 0);
    assert_eq!(seen.lock().unwrap().len(), 2);

    assert_eq!(
        gates.sync_window([b.clone(), c.clone(), d.clone()], &mut obs),
        (1, 1)
    );
    assert!(!gates.contains(&a));
    assert!(gates.is_promoted(&b));
    assert_eq!(gates.display(&d), Some(Display::Placeholder));
    assert_eq!(obs.unobserve_calls(), 2);

    assert!(gates.on_content_error(&c, &mut obs));
    assert_eq!(gates.display(&c), Some(Display::Fallback));
    assert!(!obs.is_observing(&c));
    assert!(gates.on_content_loaded(&b));
    assert_eq!(gates.get(&b).map(ItemMount::content), Some(ContentState::Loaded));
    assert!(!gates.on_content_loaded(&a));

    gates.unmount_all(&mut obs);
    assert!(gates.is_empty());
    assert!(obs.observed().is_empty());
}

#[test]
fn geometry_observer_reports_crossings_only() {
    let options = GateOptions::default();
    let mut geo = GeometryObserver::new(&options);
    for i in 0..20u32 {
        geo.observe(i);
        geo.place(&i, i as f64 * 50.0, 50.0);
    }

    // Viewport [0, 500) grown by 50 on each edge.
    let first = geo.update(0.0, 500.0);
    assert_eq!(first.len(), 20);
    let visible: Vec<u32> = first
        .iter()
        .filter(|e| e.is_intersecting)
        .map(|e| e.target)
        .collect();
    assert_eq!(visible, (0..=10).collect::<Vec<_>>());

    assert!(geo.update(0.0, 500.0).is_empty());

    let moved = geo.update(100.0, 500.0);
    let changed: Vec<(u32, bool)> = moved
        .iter()
        .map(|e| (e.target, e.is_intersecting))
        .collect();
    assert_eq!(changed, [(0, false), (11, true), (12, true)]);
}

#[test]
fn geometry_observer_reports_partial_ratio() {
    let options = GateOptions::default().with_root_margin(0.0).with_threshold(0.5);
    let mut geo = GeometryObserver::new(&options);
    geo.observe("row");
    geo.place(&"row", 480.0, 40.0);

    // 20 of 40 pixels inside [0, 500).
    let entries = geo.update(0.0, 500.0);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_intersecting);
    assert_eq!(entries[0].ratio, 0.5);

    // Unobserved targets stop reporting.
    geo.unobserve(&"row");
    assert!(geo.update(400.0, 500.0).is_empty());
}

#[test]
fn windowed_list_promotes_rows_as_they_scroll_in() {
    let promoted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&promoted);
    let options = GateOptions::default();
    let mut gates = GateSet::new(options).with_on_visible(Some(move |_: &u32| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    let mut geo = GeometryObserver::new(&options);

    let items: Vec<u32> = (0..1000).collect();
    let mut list = CatalogList::new(CatalogListOptions::new(50.0, 500.0));

    let frame_step = |list: &mut CatalogList,
                      gates: &mut GateSet<u32>,
                      geo: &mut GeometryObserver<u32>| {
        let frame = list.render(&items, false, |it, _| *it, |it, _| *it);
        let ListFrame::Populated { window, .. } = frame else {
            panic!("expected a populated frame");
        };
        gates.sync_window(window.keys().copied(), geo);
        for item in &window.items {
            geo.place(
                &item.key,
                window.layout.item_top(item.index),
                window.layout.item_height,
            );
        }
        let entries = geo.update(list.scroll_top(), 500.0);
        gates.dispatch(entries, geo);
        window.range
    };

    let range = frame_step(&mut list, &mut gates, &mut geo);
    assert_eq!((range.start, range.end), (0, 13));
    assert_eq!(promoted.load(Ordering::SeqCst), 11);
    assert!(gates.is_promoted(&10));
    assert_eq!(gates.display(&11), Some(Display::Placeholder));
    // Promoted rows released their observers.
    assert_eq!(geo.len(), 3);

    list.on_scroll_offset(1000.0, 0);
    let range = frame_step(&mut list, &mut gates, &mut geo);
    assert_eq!((range.start, range.end), (17, 33));
    assert!(!gates.contains(&10));
    assert_eq!(gates.len(), 17);
    assert_eq!(promoted.load(Ordering::SeqCst), 11 + 12);
    assert!(gates.is_promoted(&19));
    assert!(gates.is_promoted(&30));
    assert!(!gates.is_promoted(&18));
}
