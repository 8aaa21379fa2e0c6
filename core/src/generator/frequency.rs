use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// English letter frequency in per-ten-mille units (E ~12%, Q ~0.1%).
const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('a', 812),
    ('b', 149),
    ('c', 278),
    ('d', 425),
    ('e', 1202),
    ('f', 223),
    ('g', 202),
    ('h', 609),
    ('i', 697),
    ('j', 15),
    ('k', 77),
    ('l', 403),
    ('m', 241),
    ('n', 675),
    ('o', 751),
    ('p', 193),
    ('q', 10),
    ('r', 599),
    ('s', 633),
    ('t', 906),
    ('u', 276),
    ('v', 98),
    ('w', 236),
    ('x', 15),
    ('y', 197),
    ('z', 7),
];

const VOWELS: &str = "aeiou";

/// Per-level vowel reduction, percent of weight removed per level past the
/// first. The curve is a tunable; it only has to keep common letters common.
const VOWEL_DECAY_PERCENT: u32 = 5;
const VOWEL_DECAY_MAX_PERCENT: u32 = 40;

/// Draws every cell independently from a weighted letter distribution that
/// approximates real English text. Higher levels thin out vowels, which
/// makes boards harder without touching the selection or scoring rules.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrequencyGridGenerator {
    seed: u64,
}

impl FrequencyGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for FrequencyGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        config.validate()?;

        let weights = level_adjusted_weights(config.level);
        let total: u32 = weights.iter().map(|&(_, weight)| weight).sum();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let size = usize::from(config.size);
        let tiles = Array2::from_shape_fn((size, size), |_| {
            Tile::from_letter(sample_letter(&weights, total, &mut rng))
        });

        Grid::from_tiles(tiles)
    }
}

fn level_adjusted_weights(level: u32) -> [(char, u32); 26] {
    let decay = (VOWEL_DECAY_PERCENT * level.saturating_sub(1)).min(VOWEL_DECAY_MAX_PERCENT);
    let mut weights = LETTER_WEIGHTS;
    if decay > 0 {
        for (letter, weight) in &mut weights {
            if VOWELS.contains(*letter) {
                *weight = (*weight * (100 - decay) / 100).max(1);
            }
        }
    }
    weights
}

fn sample_letter(weights: &[(char, u32); 26], total: u32, rng: &mut impl Rng) -> char {
    let mut roll = rng.random_range(0..total);
    for &(letter, weight) in weights {
        if roll < weight {
            return letter;
        }
        roll -= weight;
    }
    // Unreachable while `total` is the sum of the table.
    'e'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_counts(level: u32, boards: u64) -> [u32; 26] {
        let mut counts = [0u32; 26];
        for seed in 0..boards {
            let grid = FrequencyGridGenerator::new(seed)
                .generate(GridConfig::new_unchecked(4, level))
                .unwrap();
            for (_, tile) in grid.iter_tiles() {
                let letter = match tile {
                    Tile::Qu => 'q',
                    Tile::Letter(letter) => letter,
                };
                counts[(letter as u8 - b'a') as usize] += 1;
            }
        }
        counts
    }

    #[test]
    fn distribution_favors_common_letters() {
        let counts = letter_counts(1, 200);
        let e = counts[(b'e' - b'a') as usize];
        let t = counts[(b't' - b'a') as usize];
        let q = counts[(b'q' - b'a') as usize];
        let z = counts[(b'z' - b'a') as usize];
        assert!(e > 10 * q.max(1));
        assert!(t > 10 * z.max(1));
    }

    #[test]
    fn every_cell_is_populated() {
        let grid = FrequencyGridGenerator::new(7)
            .generate(GridConfig::default())
            .unwrap();
        assert_eq!(grid.iter_tiles().count(), 16);
        for (_, tile) in grid.iter_tiles() {
            assert!(tile.letter_count() >= 1);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GridConfig::default();
        let a = FrequencyGridGenerator::new(42).generate(config).unwrap();
        let b = FrequencyGridGenerator::new(42).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn higher_levels_thin_out_vowels() {
        let easy = letter_counts(1, 150);
        let hard = letter_counts(9, 150);
        let vowels = |counts: &[u32; 26]| -> u32 {
            VOWELS
                .chars()
                .map(|v| counts[(v as u8 - b'a') as usize])
                .sum()
        };
        assert!(vowels(&hard) < vowels(&easy));
    }

    #[test]
    fn degenerate_size_is_rejected() {
        let result = FrequencyGridGenerator::new(0).generate(GridConfig::new_unchecked(1, 1));
        assert_eq!(result, Err(GameError::InvalidConfiguration));
    }
}
