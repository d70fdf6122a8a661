use once_cell::sync::Lazy;

pub const SIZE: usize = 9;
pub const BLOCK: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub r: usize,
    pub c: usize,
}

impl Pos {
    pub fn idx(self) -> usize {
        self.r * SIZE + self.c
    }
}

/// Static partition of the 81 positions into 9 rows, 9 columns and 9 aligned
/// 3x3 blocks, plus the (row, column) -> block lookup. Built once; the grid
/// only ever reads it.
#[derive(Debug, PartialEq, Eq)]
pub struct RegionIndex {
    block_board: [[usize; SIZE]; SIZE],
    rows: [[Pos; SIZE]; SIZE],
    cols: [[Pos; SIZE]; SIZE],
    blocks: [[Pos; SIZE]; SIZE],
}

pub static REGIONS: Lazy<RegionIndex> = Lazy::new(RegionIndex::build);

impl RegionIndex {
    fn build() -> Self {
        // Geometry violations mean the program cannot run at all.
        assert_eq!(SIZE, BLOCK * BLOCK, "board must be square with aligned blocks");
        assert_eq!(SIZE % BLOCK, 0, "block size must divide the board size");

        let origin = Pos { r: 0, c: 0 };
        let mut block_board = [[0usize; SIZE]; SIZE];
        let mut rows = [[origin; SIZE]; SIZE];
        let mut cols = [[origin; SIZE]; SIZE];
        let mut blocks = [[origin; SIZE]; SIZE];
        for r in 0..SIZE {
            for c in 0..SIZE {
                let b = (r / BLOCK) * BLOCK + c / BLOCK;
                let p = Pos { r, c };
                block_board[r][c] = b;
                rows[r][c] = p;
                cols[c][r] = p;
                blocks[b][(r % BLOCK) * BLOCK + c % BLOCK] = p;
            }
        }
        Self { block_board, rows, cols, blocks }
    }

    pub fn block_of(&self, r: usize, c: usize) -> usize {
        self.block_board[r][c]
    }

    pub fn row(&self, id: usize) -> &[Pos; SIZE] {
        &self.rows[id]
    }

    pub fn col(&self, id: usize) -> &[Pos; SIZE] {
        &self.cols[id]
    }

    pub fn block(&self, id: usize) -> &[Pos; SIZE] {
        &self.blocks[id]
    }
}
