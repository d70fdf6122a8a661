use anyhow::{bail, Result};
use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::cell::{Cell, Digit};
use crate::regions::{Pos, RegionIndex, REGIONS, SIZE};

/// The 9x9 board: 81 cells plus the shared region index. Propagation keeps
/// every open cell's candidate set equal to the digits not assigned anywhere
/// in its row, column, or block; nothing ever re-derives that by scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; SIZE * SIZE],
    regions: &'static RegionIndex,
    clue_contradiction: bool,
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [Cell::default(); SIZE * SIZE],
            regions: Lazy::force(&REGIONS),
            clue_contradiction: false,
        }
    }

    /// Parses the flat 81-character encoding: row-major, `.` or `0` for open
    /// cells, `1`..`9` for clues. Clues that conflict with each other are not
    /// a format error; they are recorded as a contradiction the search engine
    /// reports as exhaustion.
    pub fn decode(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != SIZE * SIZE {
            bail!("puzzle must be exactly 81 characters, got {len}");
        }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            let d = match ch {
                '.' | '0' => continue,
                '1'..='9' => ch as u8 - b'0',
                _ => bail!("invalid character {ch:?} at cell {i}"),
            };
            if g.place_clue(i / SIZE, i % SIZE, d)? {
                g.clue_contradiction = true;
            }
        }
        Ok(g)
    }

    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.value() {
                Some(d) => (b'0' + d) as char,
                None => '.',
            })
            .collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..SIZE {
            if r % 3 == 0 {
                s.push_str("+-------+-------+-------+\n");
            }
            let body = (0..3)
                .map(|b| (b * 3..b * 3 + 3).map(|c| self.render(r, c)).join(" "))
                .join(" | ");
            s.push_str(&format!("| {body} |\n"));
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    fn render(&self, r: usize, c: usize) -> char {
        match self.cells[Pos { r, c }.idx()].value() {
            Some(d) => (b'0' + d) as char,
            None => '.',
        }
    }

    pub fn cell(&self, p: Pos) -> &Cell {
        &self.cells[p.idx()]
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::has_value)
    }

    pub fn has_clue_contradiction(&self) -> bool {
        self.clue_contradiction
    }

    /// Assigns `digit` and removes it from every cell of the row, column and
    /// block. Returns true if that emptied some other open cell's candidate
    /// set, or if the digit was not a legal candidate here (in which case
    /// nothing is mutated). Both outcomes are ordinary search signals.
    pub fn place(&mut self, row: usize, col: usize, digit: Digit) -> Result<bool> {
        let p = Pos { r: row, c: col };
        if !self.cells[p.idx()].set_value(digit)? {
            return Ok(true);
        }
        Ok(self.eliminate_around(p, digit))
    }

    /// Load-time variant of `place`: the clue is written even when it is not
    /// a legal candidate, and that conflict is reported as a contradiction.
    pub fn place_clue(&mut self, row: usize, col: usize, digit: Digit) -> Result<bool> {
        let p = Pos { r: row, c: col };
        let accepted = self.cells[p.idx()].force_value(digit)?;
        let contradiction = self.eliminate_around(p, digit);
        Ok(!accepted || contradiction)
    }

    fn eliminate_around(&mut self, p: Pos, digit: Digit) -> bool {
        let regions = self.regions;
        let mut contradiction = false;
        for &q in regions
            .row(p.r)
            .iter()
            .chain(regions.col(p.c))
            .chain(regions.block(regions.block_of(p.r, p.c)))
        {
            let left = self.cells[q.idx()].update_candidate(digit, false);
            if q != p && left == 0 && !self.cells[q.idx()].has_value() {
                contradiction = true;
            }
        }
        contradiction
    }

    /// Reverses the most recent `place` of `digit` at this position: clears
    /// the value and re-enables the digit for each affected cell, but only
    /// after verifying no other still-assigned cell in that cell's row,
    /// column, or block holds the same digit.
    pub fn unplace(&mut self, row: usize, col: usize, digit: Digit) {
        let p = Pos { r: row, c: col };
        assert_eq!(
            self.cells[p.idx()].value(),
            Some(digit),
            "unplace must target the most recent assignment"
        );
        self.cells[p.idx()].clear();
        let regions = self.regions;
        for &q in regions
            .row(p.r)
            .iter()
            .chain(regions.col(p.c))
            .chain(regions.block(regions.block_of(p.r, p.c)))
        {
            if !self.digit_blocked(q, digit) {
                self.cells[q.idx()].update_candidate(digit, true);
            }
        }
    }

    fn digit_blocked(&self, q: Pos, digit: Digit) -> bool {
        let regions = self.regions;
        regions
            .row(q.r)
            .iter()
            .chain(regions.col(q.c))
            .chain(regions.block(regions.block_of(q.r, q.c)))
            .any(|&m| m != q && self.cells[m.idx()].value() == Some(digit))
    }

    /// MRV query: the open cell with the fewest remaining candidates, ties
    /// broken by first encounter in row-major order. None means solved.
    pub fn most_constrained_open_cell(&self) -> Option<Pos> {
        (0..SIZE * SIZE)
            .map(|i| Pos { r: i / SIZE, c: i % SIZE })
            .filter(|p| !self.cells[p.idx()].has_value())
            .min_by_key(|p| self.cells[p.idx()].total_available())
    }
}
