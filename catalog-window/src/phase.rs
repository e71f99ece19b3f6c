/// Which presentation a list shows for one render.
///
/// Purely a function of `(item_count, loading)`; recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListPhase {
    /// No items yet and a load is in flight.
    Loading,
    /// No items and nothing loading.
    Empty,
    /// Items are shown. `paginating` asks for a trailing indicator after the rows instead of
    /// replacing them.
    Populated { paginating: bool },
}

impl ListPhase {
    pub fn resolve(item_count: usize, loading: bool) -> Self {
        match (item_count, loading) {
            (0, true) => Self::Loading,
            (0, false) => Self::Empty,
            (_, paginating) => Self::Populated { paginating },
        }
    }

    /// `Loading` and `Empty` bypass range computation and window rendering entirely.
    pub fn is_populated(self) -> bool {
        matches!(self, Self::Populated { .. })
    }

    pub fn shows_trailing_indicator(self) -> bool {
        matches!(self, Self::Populated { paginating: true })
    }
}
