use crate::{IntersectionEntry, IntersectionObserver};

/// Default margin around the viewport, in host pixels. Rows this close to the viewport are
/// promoted slightly before they scroll into view.
pub const DEFAULT_ROOT_MARGIN: f64 = 50.0;

/// How a row is gated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateOptions {
    /// Growth of the viewport on each edge when testing intersection.
    pub root_margin: f64,
    /// Minimum intersection ratio that counts as visible, in `[0, 1]`. With `0`, any
    /// intersection counts.
    pub threshold: f64,
    /// When `false`, rows skip observation and mount already promoted.
    pub enabled: bool,
}

impl GateOptions {
    pub fn with_root_margin(mut self, root_margin: f64) -> Self {
        self.root_margin = if root_margin.is_finite() {
            root_margin
        } else {
            wwarn!(root_margin, "GateOptions: non-finite root_margin, using default");
            DEFAULT_ROOT_MARGIN
        };
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            wwarn!(threshold, "GateOptions: non-finite threshold, using 0");
            0.0
        };
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Whether `entry` counts as visible under these options.
    pub fn satisfied_by<Id>(&self, entry: &IntersectionEntry<Id>) -> bool {
        entry.is_intersecting && entry.ratio >= self.threshold
    }
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            root_margin: DEFAULT_ROOT_MARGIN,
            threshold: 0.0,
            enabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateState {
    /// No placeholder is mounted.
    Unmounted,
    /// The placeholder is mounted and waiting to be seen.
    Observing,
    /// The row has been seen; expensive content may mount. Never reverts while mounted.
    Promoted,
}

/// One-shot visibility gate for a single row.
///
/// `Unmounted -> Observing -> Promoted`, or straight to `Promoted` when gating is disabled.
/// The observer is detached the moment the gate promotes, so no further reports arrive.
/// Unmounting ends the lifetime; a later `mount` starts a fresh one.
#[derive(Clone, Debug)]
pub struct VisibilityGate<Id> {
    id: Id,
    options: GateOptions,
    state: GateState,
    attached: bool,
}

impl<Id: Clone + PartialEq> VisibilityGate<Id> {
    pub fn new(id: Id, options: GateOptions) -> Self {
        Self {
            id,
            options,
            state: GateState::Unmounted,
            attached: false,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn options(&self) -> &GateOptions {
        &self.options
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_promoted(&self) -> bool {
        self.state == GateState::Promoted
    }

    /// Mounts the placeholder. Attaches the observer unless gating is disabled.
    ///
    /// No-op if already mounted.
    pub fn mount(&mut self, observer: &mut impl IntersectionObserver<Id>) -> GateState {
        if self.state != GateState::Unmounted {
            return self.state;
        }
        if self.options.enabled {
            observer.observe(self.id.clone());
            self.attached = true;
            self.state = GateState::Observing;
        } else {
            self.state = GateState::Promoted;
        }
        self.state
    }

    /// Applies an intersection report.
    ///
    /// Promotes on the first report for this row that satisfies the threshold: the observer is
    /// detached, then `on_visible` runs. Returns `true` only for that promoting report.
    pub fn handle(
        &mut self,
        entry: &IntersectionEntry<Id>,
        observer: &mut impl IntersectionObserver<Id>,
        on_visible: impl FnOnce(&Id),
    ) -> bool {
        if self.state != GateState::Observing || !self.attached || entry.target != self.id {
            return false;
        }
        if !self.options.satisfied_by(entry) {
            return false;
        }
        self.detach(observer);
        self.state = GateState::Promoted;
        on_visible(&self.id);
        true
    }

    /// Whether an observer is currently attached for this row.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Releases the observer without promoting, for rows whose content already failed.
    pub(crate) fn detach(&mut self, observer: &mut impl IntersectionObserver<Id>) {
        if self.attached {
            observer.unobserve(&self.id);
            self.attached = false;
        }
    }

    /// Unmounts the row, detaching the observer if it is still attached.
    pub fn unmount(&mut self, observer: &mut impl IntersectionObserver<Id>) {
        self.detach(observer);
        self.state = GateState::Unmounted;
    }
}
