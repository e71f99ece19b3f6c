use alloc::vec::Vec;

use crate::{GateOptions, IntersectionEntry, IntersectionObserver};

#[derive(Clone, Debug)]
struct Watched<Id> {
    id: Id,
    /// `(top, height)` in list coordinates.
    rect: Option<(f64, f64)>,
    last_satisfied: Option<bool>,
}

/// An intersection observer computed from layout, for hosts without a native primitive.
///
/// Rows are placed with [`Self::place`] (for fixed-height lists, `top = index * item_height`),
/// and [`Self::update`] tests them against the viewport grown by `root_margin`. Like a native
/// observer, it reports a target once after it is placed and then only when the target
/// crosses the threshold in either direction.
#[derive(Clone, Debug)]
pub struct GeometryObserver<Id> {
    root_margin: f64,
    threshold: f64,
    watched: Vec<Watched<Id>>,
}

impl<Id: PartialEq + Clone> GeometryObserver<Id> {
    pub fn new(options: &GateOptions) -> Self {
        Self {
            root_margin: options.root_margin,
            threshold: options.threshold,
            watched: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.watched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    pub fn is_observing(&self, target: &Id) -> bool {
        self.watched.iter().any(|w| w.id == *target)
    }

    /// Sets the layout rect of an observed target. Ignored for unobserved targets.
    pub fn place(&mut self, target: &Id, top: f64, height: f64) {
        if let Some(w) = self.watched.iter_mut().find(|w| w.id == *target) {
            w.rect = Some((top, height));
        }
    }

    /// Tests every placed target against `[viewport_top, viewport_top + viewport_height)`
    /// grown by the root margin, returning reports for targets whose state changed.
    pub fn update(
        &mut self,
        viewport_top: f64,
        viewport_height: f64,
    ) -> Vec<IntersectionEntry<Id>> {
        let lo = viewport_top - self.root_margin;
        let hi = viewport_top + viewport_height + self.root_margin;
        let mut out = Vec::new();

        for w in &mut self.watched {
            let Some((top, height)) = w.rect else {
                continue;
            };
            let overlap = (top + height).min(hi) - top.max(lo);
            let is_intersecting = overlap > 0.0 && height > 0.0;
            let ratio = if is_intersecting {
                (overlap / height).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let satisfied = is_intersecting && ratio >= self.threshold;
            if w.last_satisfied == Some(satisfied) {
                continue;
            }
            w.last_satisfied = Some(satisfied);
            out.push(IntersectionEntry {
                target: w.id.clone(),
                is_intersecting,
                ratio,
            });
        }
        out
    }
}

impl<Id: PartialEq + Clone> IntersectionObserver<Id> for GeometryObserver<Id> {
    fn observe(&mut self, target: Id) {
        if self.is_observing(&target) {
            return;
        }
        self.watched.push(Watched {
            id: target,
            rect: None,
            last_satisfied: None,
        });
    }

    fn unobserve(&mut self, target: &Id) {
        self.watched.retain(|w| w.id != *target);
    }
}
