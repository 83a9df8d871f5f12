use super::player::Marker;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// Every row, column and diagonal, as row-major indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 3x3 grid. Cells are addressed by a row-major index in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }

    /// Write `marker` into the cell at `index`.
    ///
    /// Returns `false` without touching the board when the index is outside
    /// `0..9` (negative included) or the cell is already taken. The caller
    /// cannot tell the two apart.
    pub fn place<I>(&mut self, index: I, marker: Marker) -> bool
    where
        I: TryInto<usize>,
    {
        let Ok(index) = index.try_into() else {
            return false;
        };

        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = marker.to_cell();
                true
            }
            _ => false,
        }
    }

    /// Copy of the current cells. Changing the copy never affects the board.
    pub fn snapshot(&self) -> [Cell; CELLS] {
        self.cells
    }

    /// Get the cell at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if `marker` owns a full row, column or diagonal
    pub fn has_win(&self, marker: Marker) -> bool {
        self.winning_line(marker).is_some()
    }

    /// The first line fully owned by `marker`, if any
    pub fn winning_line(&self, marker: Marker) -> Option<[usize; 3]> {
        let cell = marker.to_cell();
        WIN_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&i| self.cells[i] == cell))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indices of the cells still open
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: [Cell; CELLS]) -> Board {
        Board { cells: layout }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.snapshot().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::new();
        for i in 0..CELLS {
            assert!(board.place(i, if i % 2 == 0 { Marker::X } else { Marker::O }));
        }
        board.reset();
        for i in 0..CELLS {
            assert_eq!(board.snapshot()[i], Cell::Empty);
        }
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();
        assert!(board.place(4, Marker::X));
        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.empty_cells().count(), 8);
    }

    #[test]
    fn test_place_on_occupied_cell_is_rejected() {
        let mut board = Board::new();
        assert!(board.place(2, Marker::O));

        assert!(!board.place(2, Marker::X));
        assert!(!board.place(2, Marker::O));
        assert_eq!(board.get(2), Some(Cell::O));
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        let before = board.snapshot();

        assert!(!board.place(-1, Marker::X));
        assert!(!board.place(9, Marker::X));
        assert!(!board.place(usize::MAX, Marker::O));
        assert!(!board.place(i64::MIN, Marker::O));

        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut board = Board::new();
        let mut snap = board.snapshot();
        snap[0] = Cell::X;

        assert_eq!(snap[0], Cell::X);
        assert_eq!(board.get(0), Some(Cell::Empty));
        assert!(board.place(0, Marker::O));
        assert_eq!(board.get(0), Some(Cell::O));
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!board.has_win(Marker::X));
        assert!(!board.has_win(Marker::O));
    }

    #[test]
    fn test_each_line_wins() {
        for line in WIN_LINES {
            for marker in [Marker::X, Marker::O] {
                let mut board = Board::new();
                let (last, first_two) = line.split_last().unwrap();
                for &i in first_two {
                    board.place(i, marker);
                }
                assert!(!board.has_win(marker), "two cells of {:?} should not win", line);

                board.place(*last, marker);
                assert!(board.has_win(marker), "{:?} should win for {:?}", line, marker);
                assert!(!board.has_win(marker.other()));
                assert_eq!(board.winning_line(marker), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.place(0, Marker::X);
        board.place(1, Marker::X);
        board.place(2, Marker::O);
        assert!(!board.has_win(Marker::X));
        assert!(!board.has_win(Marker::O));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for i in 0..CELLS - 1 {
            board.place(i, Marker::X);
            assert!(!board.is_full());
        }
        board.place(CELLS - 1, Marker::O);
        assert!(board.is_full());
    }

    #[test]
    fn test_column_win_scenario() {
        let mut board = Board::new();
        assert!(board.place(0, Marker::X));
        assert!(board.place(1, Marker::O));
        assert!(board.place(3, Marker::X));
        assert!(board.place(4, Marker::O));
        assert!(board.place(6, Marker::X));

        assert!(board.has_win(Marker::X));
        assert_eq!(board.winning_line(Marker::X), Some([0, 3, 6]));
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / O X O / O X O, placed out of order
        let layout = [
            (4, Marker::X),
            (1, Marker::O),
            (0, Marker::X),
            (8, Marker::O),
            (2, Marker::X),
            (6, Marker::O),
            (7, Marker::X),
            (3, Marker::O),
            (5, Marker::O),
        ];
        let mut board = Board::new();
        for (i, m) in layout {
            assert!(board.place(i, m));
        }

        assert!(board.is_full());
        assert!(!board.has_win(Marker::X));
        assert!(!board.has_win(Marker::O));
        assert_eq!(board.empty_cells().next(), None);
    }

    #[test]
    fn test_reset_after_win_forgets_history() {
        #[rustfmt::skip]
        let mut board = board_from([
            Cell::X, Cell::X, Cell::X,
            Cell::O, Cell::O, Cell::Empty,
            Cell::Empty, Cell::Empty, Cell::Empty,
        ]);
        assert!(board.has_win(Marker::X));

        board.reset();
        assert!(!board.has_win(Marker::X));
        assert!(board.place(0, Marker::O));
        assert!(board.place(5, Marker::X));
        assert_eq!(board.get(0), Some(Cell::O));
    }

    #[test]
    fn test_reset_after_full_board() {
        let mut board = board_from([Cell::O; CELLS]);
        assert!(board.is_full());

        board.reset();
        assert!(!board.is_full());
        assert_eq!(board, Board::new());
    }
}
