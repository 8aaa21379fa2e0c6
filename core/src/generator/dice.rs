use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// The classic sixteen-die set. Each die is a small multiset of faces tuned
/// so that a full board carries a playable mix of vowels and consonants.
const DICE: [[char; 6]; 16] = [
    ['a', 'a', 'e', 'e', 'g', 'n'],
    ['e', 'l', 'r', 't', 't', 'y'],
    ['a', 'o', 'o', 't', 't', 'w'],
    ['a', 'b', 'b', 'j', 'o', 'o'],
    ['e', 'h', 'r', 't', 'v', 'w'],
    ['c', 'i', 'm', 'o', 't', 'u'],
    ['d', 'i', 's', 't', 't', 'y'],
    ['e', 'i', 'o', 's', 's', 't'],
    ['d', 'e', 'l', 'r', 'v', 'y'],
    ['a', 'c', 'h', 'o', 'p', 's'],
    ['h', 'i', 'm', 'n', 'q', 'u'],
    ['e', 'e', 'i', 'n', 's', 'u'],
    ['e', 'e', 'g', 'h', 'n', 'w'],
    ['a', 'f', 'f', 'k', 'p', 's'],
    ['h', 'l', 'n', 'n', 'r', 'z'],
    ['d', 'e', 'i', 'l', 'r', 'x'],
];

/// Shuffles the die pool and rolls one die per cell. Sampling dice without
/// replacement keeps any single letter from flooding a board the way
/// independent draws occasionally do. Boards larger than the pool cycle
/// through it again.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiceGridGenerator {
    seed: u64,
}

impl DiceGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for DiceGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut pool = DICE;
        pool.shuffle(&mut rng);

        let size = usize::from(config.size);
        let tiles = Array2::from_shape_fn((size, size), |(row, col)| {
            let die = pool[(row * size + col) % pool.len()];
            let face = *die.choose(&mut rng).unwrap_or(&'e');
            Tile::from_letter(face)
        });

        Grid::from_tiles(tiles)
    }
}
