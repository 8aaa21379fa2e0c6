use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable NxN letter matrix. Replaced wholesale on shuffle or new level;
/// owned by the active play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows != cols || rows < 2 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { tiles })
    }

    /// Side length of the square grid.
    pub fn size(&self) -> Coord {
        self.tiles.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size && coords.1 < size
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Lowercase concatenation of the letters along `path`, in path order.
    /// Out-of-bounds positions contribute nothing; callers are expected to
    /// have run `is_valid_path` first.
    pub fn word_for_path(&self, path: &[Coord2]) -> String {
        let mut word = String::with_capacity(path.len() + 1);
        for &coords in path {
            if let Some(tile) = self.get(coords) {
                tile.push_lowercase(&mut word);
            }
        }
        word
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| ((row as Coord, col as Coord), tile))
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds a grid from rows of letters, e.g. `grid(&["ca", "ts"])`.
    pub(crate) fn grid(rows: &[&str]) -> Grid {
        let size = rows.len();
        let letters: Vec<Tile> = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(Tile::from_letter)
            .collect();
        let tiles = Array2::from_shape_vec((size, size), letters).unwrap();
        Grid::from_tiles(tiles).unwrap()
    }

    #[test]
    fn rejects_degenerate_shapes() {
        let tiny = Array2::from_elem((1, 1), Tile::Letter('a'));
        assert_eq!(Grid::from_tiles(tiny), Err(GameError::InvalidConfiguration));

        let oblong = Array2::from_elem((2, 3), Tile::Letter('a'));
        assert_eq!(
            Grid::from_tiles(oblong),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn word_for_path_expands_the_digraph() {
        let board = grid(&["qi", "ts"]);
        assert_eq!(board[(0, 0)], Tile::Qu);
        let word = board.word_for_path(&[(0, 0), (0, 1), (1, 0)]);
        assert_eq!(word, "quit");
    }

    #[test]
    fn bounds_checks() {
        let board = grid(&["ab", "cd"]);
        assert!(board.contains((1, 1)));
        assert!(!board.contains((2, 0)));
        assert_eq!(board.get((2, 0)), None);
        assert_eq!(board.validate_coords((2, 2)), Err(GameError::OutOfBounds));
    }
}
