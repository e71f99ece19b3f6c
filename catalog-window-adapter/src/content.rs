use crate::{GateOptions, GateState, IntersectionEntry, IntersectionObserver, VisibilityGate};

/// Load state of a row's expensive content (e.g. an image).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentState {
    #[default]
    Pending,
    Loaded,
    /// Terminal for the mount: a static fallback replaces the content.
    Errored,
}

/// What a mounted row should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Display {
    /// Cheap stand-in until the row is promoted.
    Placeholder,
    /// Promoted: mount (or keep showing) the real content.
    Content,
    /// Content failed to load; shown permanently for this mount.
    Fallback,
}

/// A mounted row: its visibility gate plus the state of its content load.
///
/// Failures stay with the row; they never affect sibling rows or the list.
#[derive(Clone, Debug)]
pub struct ItemMount<Id> {
    gate: VisibilityGate<Id>,
    content: ContentState,
}

impl<Id: Clone + PartialEq> ItemMount<Id> {
    pub fn new(id: Id, options: GateOptions) -> Self {
        Self {
            gate: VisibilityGate::new(id, options),
            content: ContentState::Pending,
        }
    }

    pub fn id(&self) -> &Id {
        self.gate.id()
    }

    pub fn gate(&self) -> &VisibilityGate<Id> {
        &self.gate
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn content(&self) -> ContentState {
        self.content
    }

    pub fn mount(&mut self, observer: &mut impl IntersectionObserver<Id>) -> GateState {
        self.gate.mount(observer)
    }

    pub fn handle(
        &mut self,
        entry: &IntersectionEntry<Id>,
        observer: &mut impl IntersectionObserver<Id>,
        on_visible: impl FnOnce(&Id),
    ) -> bool {
        if self.content == ContentState::Errored {
            return false;
        }
        self.gate.handle(entry, observer, on_visible)
    }

    /// Whether the host should start (or keep) loading the content.
    pub fn should_load(&self) -> bool {
        self.gate.is_promoted() && self.content == ContentState::Pending
    }

    pub fn on_content_loaded(&mut self) {
        if self.content == ContentState::Pending {
            self.content = ContentState::Loaded;
        }
    }

    /// Marks the content as failed. Terminal for this mount; an attached observer is released
    /// since gating no longer matters.
    pub fn on_content_error(&mut self, observer: &mut impl IntersectionObserver<Id>) {
        if self.content == ContentState::Errored {
            return;
        }
        wdebug!("ItemMount: content errored, showing fallback");
        self.gate.detach(observer);
        self.content = ContentState::Errored;
    }

    pub fn display(&self) -> Display {
        if self.content == ContentState::Errored {
            Display::Fallback
        } else if self.gate.is_promoted() {
            Display::Content
        } else {
            Display::Placeholder
        }
    }

    /// Ends the mount. A later `mount` starts over with a pending load.
    pub fn unmount(&mut self, observer: &mut impl IntersectionObserver<Id>) {
        self.gate.unmount(observer);
        self.content = ContentState::Pending;
    }
}
