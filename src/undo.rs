use crate::cell::Digit;
use crate::regions::Pos;

/// LIFO record of the assignments made by search (never the initial clues).
/// Removal is only permitted from the top; anything else means the search is
/// unwinding out of order, which is a bug, not a runtime condition.
#[derive(Debug, Default)]
pub struct UndoLog {
    entries: Vec<(Pos, Digit)>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Pos, d: Digit) {
        self.entries.push((p, d));
    }

    /// Pops the top entry, asserting it matches the assignment being reverted.
    pub fn pop_expecting(&mut self, p: Pos, d: Digit) {
        let top = self
            .entries
            .pop()
            .expect("undo log empty while unwinding");
        assert_eq!(top, (p, d), "undo log top does not match the assignment being reverted");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
