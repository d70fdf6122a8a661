use anyhow::{bail, Result};

pub type Digit = u8; // 1..=9

// bits 1..=9 set
const ALL_CANDIDATES: u16 = 0b11_1111_1110;

/// One grid position: an optional assigned digit plus the bitset of digits
/// still possible here, with a running count of that bitset's cardinality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    value: Option<Digit>,
    cands: u16,
    count: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self { value: None, cands: ALL_CANDIDATES, count: 9 }
    }
}

impl Cell {
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_available(&self, d: Digit) -> bool {
        self.cands & (1 << d) != 0
    }

    pub fn total_available(&self) -> u8 {
        self.count
    }

    /// Assigns `d` if it is currently a candidate. Returns false (not an
    /// error) when it is not; the search loop hits that case constantly.
    pub fn set_value(&mut self, d: Digit) -> Result<bool> {
        check_range(d)?;
        if !self.is_available(d) {
            return Ok(false);
        }
        self.value = Some(d);
        Ok(true)
    }

    /// Assigns `d` unconditionally (initial clues only). Returns whether the
    /// digit was actually a legal candidate, so the loader can flag conflicts.
    pub fn force_value(&mut self, d: Digit) -> Result<bool> {
        check_range(d)?;
        let accepted = self.is_available(d);
        self.value = Some(d);
        Ok(accepted)
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Marks `d` available or not. The count moves by exactly one only when
    /// the availability actually changes, so repeated updates are no-ops.
    /// Returns the new count.
    pub fn update_candidate(&mut self, d: Digit, available: bool) -> u8 {
        debug_assert!((1..=9).contains(&d), "candidate digit out of range");
        let bit = 1u16 << d;
        if available && self.cands & bit == 0 {
            self.cands |= bit;
            self.count += 1;
        } else if !available && self.cands & bit != 0 {
            self.cands &= !bit;
            self.count -= 1;
        }
        self.count
    }

    /// Smallest available digit strictly greater than `after`, if any.
    /// Calling with `after == 0` starts the ascending enumeration.
    pub fn next_candidate(&self, after: Digit) -> Option<Digit> {
        let masked = self.cands & !((1u16 << (after + 1)) - 1);
        if masked == 0 {
            None
        } else {
            Some(masked.trailing_zeros() as Digit)
        }
    }
}

fn check_range(d: Digit) -> Result<()> {
    if !(1..=9).contains(&d) {
        bail!("digit {d} out of range 1..=9");
    }
    Ok(())
}
