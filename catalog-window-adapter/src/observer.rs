use alloc::vec::Vec;

/// One intersection report for an observed target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionEntry<Id> {
    pub target: Id,
    pub is_intersecting: bool,
    /// Visible fraction of the target, in `[0, 1]`.
    pub ratio: f64,
}

/// Seam to a viewport-intersection primitive.
///
/// The observer only tracks *which* targets are watched. Reports flow back the other way: the
/// host collects [`IntersectionEntry`] values from its primitive and hands them to
/// [`crate::VisibilityGate::handle`] or [`crate::GateSet::dispatch`].
pub trait IntersectionObserver<Id> {
    fn observe(&mut self, target: Id);

    fn unobserve(&mut self, target: &Id);
}

impl<Id, O: IntersectionObserver<Id> + ?Sized> IntersectionObserver<Id> for &mut O {
    fn observe(&mut self, target: Id) {
        (**self).observe(target);
    }

    fn unobserve(&mut self, target: &Id) {
        (**self).unobserve(target);
    }
}

/// A hand-driven observer for tests and headless harnesses.
///
/// It reports intersections only for targets it is currently observing, the way a real
/// observer stops calling back after `unobserve`.
#[derive(Clone, Debug)]
pub struct ManualObserver<Id> {
    observed: Vec<Id>,
    observe_calls: usize,
    unobserve_calls: usize,
}

impl<Id: PartialEq + Clone> ManualObserver<Id> {
    pub fn new() -> Self {
        Self {
            observed: Vec::new(),
            observe_calls: 0,
            unobserve_calls: 0,
        }
    }

    pub fn is_observing(&self, target: &Id) -> bool {
        self.observed.contains(target)
    }

    pub fn observed(&self) -> &[Id] {
        &self.observed
    }

    pub fn observe_calls(&self) -> usize {
        self.observe_calls
    }

    pub fn unobserve_calls(&self) -> usize {
        self.unobserve_calls
    }

    /// Reports `target` as intersecting with `ratio`, if it is observed.
    pub fn intersect(&self, target: &Id, ratio: f64) -> Option<IntersectionEntry<Id>> {
        if !self.is_observing(target) {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        Some(IntersectionEntry {
            target: target.clone(),
            is_intersecting: ratio > 0.0,
            ratio,
        })
    }

    /// Reports `target` as having left the viewport, if it is observed.
    pub fn leave(&self, target: &Id) -> Option<IntersectionEntry<Id>> {
        self.intersect(target, 0.0)
    }
}

impl<Id: PartialEq + Clone> Default for ManualObserver<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: PartialEq + Clone> IntersectionObserver<Id> for ManualObserver<Id> {
    fn observe(&mut self, target: Id) {
        self.observe_calls += 1;
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    fn unobserve(&mut self, target: &Id) {
        self.unobserve_calls += 1;
        self.observed.retain(|t| t != target);
    }
}
