//! 3x3 board representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ParseBoardError, Rejection};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Winning line indices on the 3x3 board.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A mark on the board. The player is always X and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The human player's mark.
    pub const PLAYER: Mark = Mark::X;

    /// The computer opponent's mark.
    pub const OPPONENT: Mark = Mark::O;

    #[must_use]
    pub const fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Empty cells, in index order.
pub type EmptyCells = SmallVec<[usize; CELLS]>;

/// Nine cells, each empty or marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// Put `mark` on an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), Rejection> {
        match self.cells.get(index) {
            None => Err(Rejection::CellOutOfRange { index }),
            Some(Some(_)) => Err(Rejection::CellOccupied { index }),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    /// Overwrite a cell without checks. Used by the search for speculative moves.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Undo [`set`](Self::set).
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// The completed line and its owner, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match self.cells[a] {
                Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => {
                    Some((mark, line))
                }
                _ => None,
            }
        })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|(mark, _)| mark)
    }

    /// Base-3 encoding of the position, unique per board.
    #[must_use]
    pub fn encode(&self) -> u32 {
        self.cells.iter().fold(0, |acc, cell| {
            acc * 3
                + match cell {
                    None => 0,
                    Some(Mark::X) => 1,
                    Some(Mark::O) => 2,
                }
        })
    }
}

impl fmt::Display for Board {
    /// Three rows of `X`, `O` and `.` separated by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                let symbol = cell.map_or('.', Mark::symbol);
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads nine cells, ignoring whitespace. `.`, `-` and `_` are empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(ParseBoardError::WrongLength { got: symbols.len() });
        }

        let mut board = Board::new();
        for (position, character) in symbols.into_iter().enumerate() {
            board.cells[position] = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => return Err(ParseBoardError::InvalidCell { character, position }),
            };
        }
        Ok(board)
    }
}
