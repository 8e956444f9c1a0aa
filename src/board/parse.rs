//! Text format for boards
//!
//! The format is the one used by board files in the original game setup:
//! a header line `n m` (block width, block height) followed by N·N cell
//! tokens in row-major order, `.` for an empty cell and a decimal value
//! otherwise. Whitespace between tokens is not significant.
//!
//! ```
//! use sudoku_duel::board::Board;
//!
//! let board: Board = "2 2\n\
//!     1 . . .\n\
//!     . . . .\n\
//!     . . . .\n\
//!     . . . 4\n"
//!     .parse()
//!     .unwrap();
//! assert_eq!(board.empty_count(), 14);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Board, Coord, Dims, DimsError, EMPTY};

/// Errors from parsing a board text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("missing header line with block dimensions")]
    MissingHeader,
    #[error("malformed header: expected `n m`, got {0:?}")]
    BadHeader(String),
    #[error(transparent)]
    Dims(#[from] DimsError),
    #[error("expected {expected} cells, found {found}")]
    WrongCellCount { expected: usize, found: usize },
    #[error("malformed cell token {0:?}")]
    BadCell(String),
    #[error("cell value {value} out of range 1..={max}")]
    ValueOutOfRange { value: u64, max: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().ok_or(ParseBoardError::MissingHeader)?;

        let mut parts = header.split_whitespace();
        let (n, m) = match (parts.next(), parts.next(), parts.next()) {
            (Some(n), Some(m), None) => {
                let n: u8 = n
                    .parse()
                    .map_err(|_| ParseBoardError::BadHeader(header.to_string()))?;
                let m: u8 = m
                    .parse()
                    .map_err(|_| ParseBoardError::BadHeader(header.to_string()))?;
                (n, m)
            }
            _ => return Err(ParseBoardError::BadHeader(header.to_string())),
        };

        let dims = Dims::new(n, m)?;
        let side = dims.side();
        let mut board = Board::new(dims);

        let mut count = 0usize;
        for token in lines.flat_map(str::split_whitespace) {
            if count == dims.cell_count() {
                return Err(ParseBoardError::WrongCellCount {
                    expected: dims.cell_count(),
                    found: count + 1,
                });
            }
            let pos = Coord::from_index(count, side);
            if token != "." {
                let value: u64 = token
                    .parse()
                    .map_err(|_| ParseBoardError::BadCell(token.to_string()))?;
                if value < 1 || value as usize > side {
                    return Err(ParseBoardError::ValueOutOfRange { value, max: side });
                }
                board.put(pos, value as u8);
            }
            count += 1;
        }

        if count != dims.cell_count() {
            return Err(ParseBoardError::WrongCellCount {
                expected: dims.cell_count(),
                found: count,
            });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dims();
        writeln!(f, "{} {}", dims.n(), dims.m())?;
        // Width of the widest value, for column alignment
        let width = dims.side().to_string().len();
        for row in 0..dims.side() as u8 {
            for col in 0..dims.side() as u8 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let v = self.get(Coord::new(row, col));
                if v == EMPTY {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{v:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_board() {
        let text = "2 2\n. . . .\n. . . .\n. . . .\n. . . .\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.side(), 4);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_parse_values() {
        let text = "2 2\n1 2 3 4\n. . . .\n. . . .\n. . . .\n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(Coord::new(0, 0)), 1);
        assert_eq!(board.get(Coord::new(0, 3)), 4);
        assert!(board.is_cell_empty(Coord::new(1, 0)));
    }

    #[test]
    fn test_header_order_is_width_then_height() {
        // A `2 3` header means n=2, m=3: blocks 3 rows tall and 2 columns
        // wide, so rows 0-2 of a column share a block and row 3 does not.
        let board: Board = "2 3\n\
            . . . . . .\n\
            . . . . . .\n\
            . . . . . .\n\
            . . . . . .\n\
            . . . . . .\n\
            . . . . . .\n"
            .parse()
            .unwrap();
        assert_eq!(board.dims().n(), 2);
        assert_eq!(board.dims().m(), 3);

        let index = crate::board::RegionIndex::new(board.dims());
        let [_, _, block_top] = index.cell_regions(Coord::new(0, 0));
        let [_, _, block_mid] = index.cell_regions(Coord::new(2, 0));
        let [_, _, block_low] = index.cell_regions(Coord::new(3, 0));
        assert_eq!(block_top, block_mid);
        assert_ne!(block_top, block_low);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "2 3\n\
            1 . . . . 6\n\
            . . 3 . . .\n\
            . 5 . . 2 .\n\
            . . . 4 . .\n\
            6 . . . . 1\n\
            . 2 . . 5 .\n";
        let board: Board = text.parse().unwrap();
        let rendered = board.to_string();
        let reparsed: Board = rendered.parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        assert!(matches!(
            "abc\n".parse::<Board>(),
            Err(ParseBoardError::BadHeader(_))
        ));
        assert!(matches!(
            "".parse::<Board>(),
            Err(ParseBoardError::MissingHeader)
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_cell_count() {
        assert!(matches!(
            "2 2\n. . .\n".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount {
                expected: 16,
                found: 3
            })
        ));
    }

    #[test]
    fn test_parse_rejects_extra_cells() {
        let mut text = String::from("2 2\n");
        for _ in 0..17 {
            text.push_str(". ");
        }
        assert!(matches!(
            text.parse::<Board>(),
            Err(ParseBoardError::WrongCellCount {
                expected: 16,
                found: 17
            })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_value() {
        let text = "2 2\n5 . . .\n. . . .\n. . . .\n. . . .\n";
        assert!(matches!(
            text.parse::<Board>(),
            Err(ParseBoardError::ValueOutOfRange { value: 5, max: 4 })
        ));
    }

    #[test]
    fn test_parse_rejects_zero_dims() {
        assert!(matches!(
            "0 2\n".parse::<Board>(),
            Err(ParseBoardError::Dims(DimsError::Empty))
        ));
    }
}
