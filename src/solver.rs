use anyhow::Result;

use crate::cell::Digit;
use crate::grid::Grid;
use crate::trace::Trace;
use crate::undo::UndoLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Exhausted,
}

/// Depth-first search over assignments, MRV-ordered, with forward checking
/// done by `Grid::place` and exact reversal through the undo log.
pub struct SearchEngine {
    undo: UndoLog,
    steps: usize,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { undo: UndoLog::new(), steps: 0 }
    }

    /// Assignments attempted during the last solve.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn solve(&mut self, grid: &mut Grid, trace: &mut Trace) -> Result<Outcome> {
        self.undo.clear();
        self.steps = 0;
        if grid.has_clue_contradiction() {
            trace.note("Exhausted", "a clue conflicts with its row, column, or block");
            return Ok(Outcome::Exhausted);
        }
        let outcome = self.search(grid, trace, 0)?;
        if outcome == Outcome::Solved {
            // Nothing left to unwind; committed assignments stay on the grid.
            self.undo.clear();
        }
        Ok(outcome)
    }

    fn search(&mut self, grid: &mut Grid, trace: &mut Trace, depth: usize) -> Result<Outcome> {
        let Some(p) = grid.most_constrained_open_cell() else {
            return Ok(Outcome::Solved);
        };
        let mut d: Digit = 0;
        while let Some(next) = grid.cell(p).next_candidate(d) {
            d = next;
            self.steps += 1;
            let contradiction = grid.place(p.r, p.c, d)?;
            trace.assign(depth, p, d, contradiction);
            self.undo.push(p, d);
            if !contradiction && self.search(grid, trace, depth + 1)? == Outcome::Solved {
                return Ok(Outcome::Solved);
            }
            self.undo.pop_expecting(p, d);
            grid.unplace(p.r, p.c, d);
            trace.retract(depth, p, d);
        }
        Ok(Outcome::Exhausted)
    }
}
