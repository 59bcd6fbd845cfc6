use crate::models::Skip;

/// View-level selection state: zero or one chosen skip.
///
/// `select` replaces the current selection unconditionally; re-selecting
/// the already-selected record is idempotent. There is no deselect, so a
/// selection is only ever cleared by replacement.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<Skip>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current selection with the given record.
    pub fn select(&mut self, skip: Skip) {
        self.current = Some(skip);
    }

    pub fn current(&self) -> Option<&Skip> {
        self.current.as_ref()
    }

    /// Whether the given record is the current selection, compared by id.
    pub fn is_selected(&self, skip: &Skip) -> bool {
        self.current.as_ref().is_some_and(|s| s.id == skip.id)
    }
}
