use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::util::Position;
use super::Error;

/// Row-major scan order of the up-to-8 cells at Chebyshev distance 1. The
/// order is the tie-break for which path a search reports first.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size rectangular grid of letter tiles. A tile is a string of one or
/// more characters, normalized to uppercase at construction. The grid never
/// changes after it has been built.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Vec<String>>,
}

impl Board {
    /// Builds a square board from a flat row-major array of length n².
    pub fn from_flat(tiles: &[String]) -> Result<Self, Error> {
        let n = (tiles.len() as f64).sqrt().round() as usize;
        if tiles.is_empty() || n * n != tiles.len() {
            return Err(Error::InvalidShape(format!(
                "a flat array of {} tiles does not form a square board",
                tiles.len()
            )));
        }
        let rows = tiles.chunks(n).map(|row| row.to_vec()).collect();
        Self::from_rows(rows)
    }

    /// Loads a board from a JSON file holding a rectangular array of rows of
    /// tile strings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut data = String::new();
        File::open(path.as_ref())?.read_to_string(&mut data)?;
        let raw: Vec<Vec<String>> = serde_json::from_str(&data)?;
        Self::from_rows(raw)
    }

    /// Builds a board from pre-shaped rows; every row must have the same
    /// non-zero width.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if height == 0 || width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidShape(format!(
                "expected a non-empty rectangular grid, got {} rows",
                height
            )));
        }
        if rows.iter().flatten().any(|tile| tile.is_empty()) {
            return Err(Error::InvalidArgument("board tiles must be non-empty"));
        }
        let tiles = rows
            .into_iter()
            .map(|row| row.into_iter().map(|tile| tile.to_uppercase()).collect())
            .collect();
        Ok(Self {
            rows: height,
            cols: width,
            tiles,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the tile occupying the given cell
    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[pos.row][pos.col]
    }

    /// Returns all the valid positions adjacent to `pos`, in the fixed
    /// row-major scan order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut result = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = pos.row as isize + dr;
            let col = pos.col as isize + dc;
            if row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols {
                result.push(Position {
                    row: row as usize,
                    col: col as usize,
                });
            }
        }
        result
    }

    /// Iterates over every cell position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }
}

impl Default for Board {
    /// The stock 4x4 grid the solver starts with before `set_board`.
    fn default() -> Self {
        let tiles = [
            ["E", "E", "C", "A"],
            ["A", "L", "E", "P"],
            ["H", "N", "B", "O"],
            ["Q", "T", "T", "Y"],
        ]
        .iter()
        .map(|row| row.iter().map(|tile| tile.to_string()).collect())
        .collect();
        Self {
            rows: 4,
            cols: 4,
            tiles,
        }
    }
}

impl std::ops::Index<Position> for Board {
    type Output = str;

    fn index(&self, index: Position) -> &Self::Output {
        &self.tiles[index.row][index.col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_from_flat_array() {
        let board = Board::from_flat(&tiles(&["c", "a", "t", "s"])).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        // Tiles are normalized to uppercase
        assert_eq!(board.tile(Position { row: 0, col: 1 }), "A");
        assert_eq!(&board[Position { row: 1, col: 1 }], "S");
    }

    #[test]
    fn rejects_non_square_array() {
        let err = Board::from_flat(&tiles(&["A", "B", "C"])).unwrap_err();
        assert!(matches!(err, Error::InvalidShape(_)));
        assert!(matches!(
            Board::from_flat(&[]).unwrap_err(),
            Error::InvalidShape(_)
        ));
    }

    #[test]
    fn rejects_empty_tiles() {
        let err = Board::from_flat(&tiles(&["A", "", "C", "D"])).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![tiles(&["A", "B"]), tiles(&["C"])];
        assert!(matches!(
            Board::from_rows(rows).unwrap_err(),
            Error::InvalidShape(_)
        ));
    }

    #[test]
    fn missing_board_file_is_invalid_input() {
        let err = Board::from_file("/definitely/not/here/board.json").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn malformed_board_file_is_a_json_error() {
        let path = std::env::temp_dir().join("boggle_board_malformed.json");
        std::fs::write(&path, r#"[["A", "B"], ["C","#).unwrap();
        let err = Board::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn loads_rectangular_board_from_file() {
        let path = std::env::temp_dir().join("boggle_board_ok.json");
        std::fs::write(&path, r#"[["c", "a"], ["t", "s"]]"#).unwrap();
        let board = Board::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board.tile(Position { row: 1, col: 1 }), "S");
    }

    #[test]
    fn neighbor_counts_at_corner_edge_and_center() {
        let board = Board::default();
        assert_eq!(board.neighbors(Position { row: 0, col: 0 }).len(), 3);
        assert_eq!(board.neighbors(Position { row: 0, col: 2 }).len(), 5);
        assert_eq!(board.neighbors(Position { row: 1, col: 1 }).len(), 8);
    }

    #[test]
    fn neighbor_order_is_row_major() {
        let board = Board::default();
        let indices: Vec<usize> = board
            .neighbors(Position { row: 1, col: 1 })
            .iter()
            .map(|p| p.as_index(board.cols()))
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 4, 6, 8, 9, 10]);
    }

    #[test]
    fn renders_rows_separated_by_newlines() {
        let board = Board::from_flat(&tiles(&["A", "B", "C", "D"])).unwrap();
        assert_eq!(board.to_string(), "A B\nC D");
    }
}
