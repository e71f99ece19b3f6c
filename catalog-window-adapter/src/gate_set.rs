use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::key::{KeyMap, KeySet};
use crate::{
    Display, GateKey, GateOptions, GateState, IntersectionEntry, IntersectionObserver, ItemMount,
};

/// Called once per promotion with the promoted row's id (telemetry, prefetch hand-off).
pub type OnVisibleCallback<Id> = Arc<dyn Fn(&Id) + Send + Sync>;

/// The gated rows of one list, keyed by row id.
///
/// Typically kept in step with the rendered window via [`Self::sync_window`]: rows entering the
/// window mount a gate, rows leaving it unmount theirs.
#[derive(Clone)]
pub struct GateSet<Id> {
    options: GateOptions,
    on_visible: Option<OnVisibleCallback<Id>>,
    mounts: KeyMap<Id, ItemMount<Id>>,
}

impl<Id: GateKey> GateSet<Id> {
    pub fn new(options: GateOptions) -> Self {
        Self {
            options,
            on_visible: None,
            mounts: KeyMap::new(),
        }
    }

    pub fn with_on_visible(
        mut self,
        on_visible: Option<impl Fn(&Id) + Send + Sync + 'static>,
    ) -> Self {
        self.on_visible = on_visible.map(|f| Arc::new(f) as _);
        self
    }

    pub fn set_on_visible(&mut self, on_visible: Option<impl Fn(&Id) + Send + Sync + 'static>) {
        self.on_visible = on_visible.map(|f| Arc::new(f) as _);
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.mounts.contains_key(id)
    }

    pub fn get(&self, id: &Id) -> Option<&ItemMount<Id>> {
        self.mounts.get(id)
    }

    pub fn is_promoted(&self, id: &Id) -> bool {
        self.mounts
            .get(id)
            .is_some_and(|m| m.gate_state() == GateState::Promoted)
    }

    pub fn display(&self, id: &Id) -> Option<Display> {
        self.mounts.get(id).map(ItemMount::display)
    }

    /// Mounts a gate for `id`. Already-mounted rows keep their state.
    pub fn mount(&mut self, id: Id, observer: &mut impl IntersectionObserver<Id>) -> GateState {
        if let Some(existing) = self.mounts.get(&id) {
            return existing.gate_state();
        }
        let mut mount = ItemMount::new(id.clone(), self.options);
        let state = mount.mount(observer);
        self.mounts.insert(id, mount);
        state
    }

    /// Unmounts the gate for `id`, releasing its observer. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, id: &Id, observer: &mut impl IntersectionObserver<Id>) -> bool {
        let Some(mut mount) = self.mounts.remove(id) else {
            return false;
        };
        mount.unmount(observer);
        true
    }

    pub fn unmount_all(&mut self, observer: &mut impl IntersectionObserver<Id>) {
        for (_, mut mount) in core::mem::take(&mut self.mounts) {
            mount.unmount(observer);
        }
    }

    /// Makes the mounted set equal to `ids`, in the given order for new mounts.
    ///
    /// Returns `(mounted, unmounted)` counts.
    pub fn sync_window(
        &mut self,
        ids: impl IntoIterator<Item = Id>,
        observer: &mut impl IntersectionObserver<Id>,
    ) -> (usize, usize) {
        let incoming: Vec<Id> = ids.into_iter().collect();
        let keep: KeySet<Id> = incoming.iter().cloned().collect();

        let stale: Vec<Id> = self
            .mounts
            .keys()
            .filter(|id| !keep.contains(*id))
            .cloned()
            .collect();
        for id in &stale {
            self.unmount(id, observer);
        }

        let mut mounted = 0usize;
        for id in incoming {
            if !self.mounts.contains_key(&id) {
                self.mount(id, observer);
                mounted += 1;
            }
        }
        wtrace!(mounted, unmounted = stale.len(), "GateSet::sync_window");
        (mounted, stale.len())
    }

    /// Routes intersection reports to their gates. Returns how many rows were promoted.
    ///
    /// Reports for unknown or already promoted rows are ignored.
    pub fn dispatch(
        &mut self,
        entries: impl IntoIterator<Item = IntersectionEntry<Id>>,
        observer: &mut impl IntersectionObserver<Id>,
    ) -> usize {
        let on_visible = &self.on_visible;
        let mut promoted = 0usize;
        for entry in entries {
            let Some(mount) = self.mounts.get_mut(&entry.target) else {
                continue;
            };
            let fired = mount.handle(&entry, observer, |id| {
                if let Some(cb) = on_visible {
                    cb(id);
                }
            });
            if fired {
                promoted += 1;
            }
        }
        promoted
    }

    pub fn on_content_loaded(&mut self, id: &Id) -> bool {
        let Some(mount) = self.mounts.get_mut(id) else {
            return false;
        };
        mount.on_content_loaded();
        true
    }

    pub fn on_content_error(
        &mut self,
        id: &Id,
        observer: &mut impl IntersectionObserver<Id>,
    ) -> bool {
        let Some(mount) = self.mounts.get_mut(id) else {
            return false;
        };
        mount.on_content_error(observer);
        true
    }
}

impl<Id> core::fmt::Debug for GateSet<Id> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GateSet")
            .field("options", &self.options)
            .field("on_visible", &self.on_visible.is_some())
            .field("mounted", &self.mounts.len())
            .finish()
    }
}
