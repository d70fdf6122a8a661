use doku::regions::REGIONS;
use doku::undo::UndoLog;
use doku::{Cell, Grid, Pos};

const EASY: &str = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn fresh_cell_has_all_nine_candidates() {
    let cell = Cell::default();
    assert!(!cell.has_value());
    assert_eq!(cell.total_available(), 9);
    for d in 1..=9 {
        assert!(cell.is_available(d));
    }
}

#[test]
fn candidate_updates_are_idempotent() {
    let mut cell = Cell::default();
    assert_eq!(cell.update_candidate(5, false), 8);
    assert_eq!(cell.update_candidate(5, false), 8);
    assert_eq!(cell.update_candidate(5, true), 9);
    assert_eq!(cell.update_candidate(5, true), 9);
}

#[test]
fn next_candidate_walks_ascending() {
    let mut cell = Cell::default();
    assert_eq!(cell.next_candidate(0), Some(1));
    assert_eq!(cell.next_candidate(1), Some(2));
    assert_eq!(cell.next_candidate(9), None);
    cell.update_candidate(2, false);
    assert_eq!(cell.next_candidate(1), Some(3));
}

#[test]
fn digit_out_of_range_is_an_error() {
    let mut cell = Cell::default();
    assert!(cell.set_value(0).is_err());
    assert!(cell.set_value(10).is_err());
}

#[test]
fn refused_digit_is_not_fatal() {
    let mut cell = Cell::default();
    cell.update_candidate(5, false);
    assert_eq!(cell.set_value(5).unwrap(), false);
    assert!(!cell.has_value());
    assert_eq!(cell.set_value(6).unwrap(), true);
    assert_eq!(cell.value(), Some(6));
}

#[test]
fn blocks_are_aligned_three_by_three() {
    assert_eq!(REGIONS.block_of(0, 0), 0);
    assert_eq!(REGIONS.block_of(0, 3), 1);
    assert_eq!(REGIONS.block_of(4, 4), 4);
    assert_eq!(REGIONS.block_of(8, 8), 8);
    for b in 0..9 {
        let members = REGIONS.block(b);
        assert_eq!(members.len(), 9);
        for w in members.windows(2) {
            assert_ne!(w[0], w[1]);
        }
    }
}

#[test]
fn every_position_belongs_to_its_row_col_and_block() {
    for r in 0..9 {
        for c in 0..9 {
            let p = Pos { r, c };
            assert!(REGIONS.row(r).contains(&p));
            assert!(REGIONS.col(c).contains(&p));
            assert!(REGIONS.block(REGIONS.block_of(r, c)).contains(&p));
        }
    }
}

#[test]
fn decode_then_encode_round_trips() {
    let g = Grid::decode(EASY).unwrap();
    assert_eq!(g.encode(), EASY);
}

#[test]
fn wrong_length_is_rejected() {
    assert!(Grid::decode("53..7").is_err());
    assert!(Grid::decode(&".".repeat(82)).is_err());
}

#[test]
fn bad_character_is_rejected() {
    let mut s = ".".repeat(80);
    s.push('x');
    assert!(Grid::decode(&s).is_err());
}

#[test]
fn place_then_unplace_restores_state() {
    let mut g = Grid::decode(EASY).unwrap();
    let before = g.clone();
    let p = g.most_constrained_open_cell().unwrap();
    let d = g.cell(p).next_candidate(0).unwrap();
    let contradiction = g.place(p.r, p.c, d).unwrap();
    assert!(!contradiction);
    g.unplace(p.r, p.c, d);
    assert_eq!(g, before);
}

#[test]
fn duplicate_clues_in_a_row_contradict_at_load() {
    let puzzle = format!("55{}", ".".repeat(79));
    let g = Grid::decode(&puzzle).unwrap();
    assert!(g.has_clue_contradiction());
}

#[test]
fn propagation_can_empty_a_cell_at_load() {
    // Row 1 pins its last cell to 9; the 9 below then starves it.
    let puzzle = format!("12345678.{}{}", "........9", ".".repeat(63));
    let g = Grid::decode(&puzzle).unwrap();
    assert!(g.has_clue_contradiction());
}

#[test]
fn mrv_prefers_the_fewest_candidates() {
    let puzzle = format!("12345678.{}", ".".repeat(72));
    let g = Grid::decode(&puzzle).unwrap();
    assert_eq!(g.most_constrained_open_cell(), Some(Pos { r: 0, c: 8 }));
}

#[test]
fn mrv_ties_break_in_row_major_order() {
    let g = Grid::empty();
    assert_eq!(g.most_constrained_open_cell(), Some(Pos { r: 0, c: 0 }));
}

#[test]
fn undo_log_pops_in_reverse_order() {
    let mut log = UndoLog::new();
    log.push(Pos { r: 0, c: 0 }, 5);
    log.push(Pos { r: 1, c: 1 }, 6);
    assert_eq!(log.len(), 2);
    log.pop_expecting(Pos { r: 1, c: 1 }, 6);
    log.pop_expecting(Pos { r: 0, c: 0 }, 5);
    assert!(log.is_empty());
}

#[test]
#[should_panic(expected = "undo log empty")]
fn popping_an_empty_undo_log_panics() {
    let mut log = UndoLog::new();
    log.pop_expecting(Pos { r: 0, c: 0 }, 1);
}

#[test]
#[should_panic(expected = "does not match")]
fn out_of_order_undo_panics() {
    let mut log = UndoLog::new();
    log.push(Pos { r: 0, c: 0 }, 5);
    log.push(Pos { r: 1, c: 1 }, 6);
    log.pop_expecting(Pos { r: 0, c: 0 }, 5);
}
