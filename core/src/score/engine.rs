use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Scrabble letter values for a..z, used for the rarity bonus.
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

const VOWELS: &str = "aeiou";
const RARE_LETTERS: &str = "jqxz";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.0,
        }
    }
}

/// Caller-supplied snapshot of everything scoring needs besides the word
/// itself. Modifier iteration order is the caller's and must be stable for
/// reproducible results.
#[derive(Copy, Clone, Debug)]
pub struct ScoreContext<'a> {
    pub difficulty: Difficulty,
    /// Seconds left on the session clock.
    pub time_remaining: u32,
    pub modifiers: &'a [Modifier],
    /// Words already accepted this session, for chain and growth effects.
    pub words_found: &'a [String],
    pub level: u32,
    /// Cells of the submitted path, for spatially scoped effects.
    pub path: &'a [Coord2],
    /// Cells currently flagged golden by the session owner.
    pub golden_cells: &'a [Coord2],
}

impl<'a> ScoreContext<'a> {
    pub fn new(difficulty: Difficulty, time_remaining: u32) -> Self {
        Self {
            difficulty,
            time_remaining,
            modifiers: &[],
            words_found: &[],
            level: 1,
            path: &[],
            golden_cells: &[],
        }
    }
}

/// Length-tier base score. Two-letter words pass path and lexicon validation
/// but fall outside every tier and score zero; that gap is intentional and
/// kept as-is.
pub fn base_score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3..=5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Rarity bonus: summed Scrabble values normalized by word length. The `u`
/// riding along with a `qu` digraph is skipped so the synthetic tile is not
/// counted twice.
pub fn rarity_bonus(word: &str) -> f64 {
    let mut sum = 0u32;
    let mut len = 0u32;
    let mut after_q = false;
    for letter in word.chars().filter_map(|c| {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then_some(c)
    }) {
        len += 1;
        if after_q && letter == 'u' {
            after_q = false;
            continue;
        }
        after_q = letter == 'q';
        sum += LETTER_VALUES[(letter as u8 - b'a') as usize];
    }
    if len == 0 {
        return 1.0;
    }
    1.0 + f64::from(sum) / (f64::from(len) * 10.0)
}

/// Time-pressure multiplier: generous while the clock is comfortable,
/// baseline once it runs low.
pub fn time_multiplier(time_remaining: u32) -> f64 {
    if time_remaining > 60 {
        1.5
    } else if time_remaining > 30 {
        1.2
    } else {
        1.0
    }
}

fn count_in(word: &str, alphabet: &str) -> u32 {
    word.chars()
        .filter(|c| alphabet.contains(c.to_ascii_lowercase()))
        .count() as u32
}

/// Point value of a validated word under `ctx`.
///
/// Pipeline: length tier, difficulty, rarity, time multiplier, floor to an
/// integer, then every active modifier in iteration order, floor again, and
/// a final minimum of one point. The double rounding is part of the contract
/// and must not be collapsed.
///
/// Probability-gated modifiers draw from `rng`; pass a seeded
/// [`rand::rngs::SmallRng`] when determinism matters.
pub fn score<R: Rng + ?Sized>(word: &str, ctx: &ScoreContext<'_>, rng: &mut R) -> u32 {
    let base = base_score(word);
    if base == 0 {
        return 0;
    }

    let shaped = f64::from(base)
        * ctx.difficulty.multiplier()
        * rarity_bonus(word)
        * time_multiplier(ctx.time_remaining);
    let mut running = shaped.floor();

    for modifier in ctx.modifiers {
        apply_score_modifier(modifier, word, ctx, &mut running, rng);
    }

    running.floor().max(1.0) as u32
}

fn apply_score_modifier<R: Rng + ?Sized>(
    modifier: &Modifier,
    word: &str,
    ctx: &ScoreContext<'_>,
    running: &mut f64,
    rng: &mut R,
) {
    use Modifier::*;

    match *modifier {
        FlatPerLetter { value } => *running += value * word.chars().count() as f64,
        VowelBonus { value } => *running += value * f64::from(count_in(word, VOWELS)),
        RareLetterBonus { value } => *running += value * f64::from(count_in(word, RARE_LETTERS)),
        BaseScoreBonus { value } => *running += value,
        LengthThresholdMultiplier {
            min_length,
            multiplier,
        } => {
            if word.chars().count() >= min_length {
                *running *= multiplier;
            }
        }
        ShortWordMultiplier {
            max_length,
            multiplier,
        } => {
            if word.chars().count() <= max_length {
                *running *= multiplier;
            }
        }
        LetterMultiplier { value } => *running *= value,
        AvalancheBonus { interval, value } => {
            let ordinal = ctx.words_found.len() as u32 + 1;
            if interval > 0 && ordinal % interval == 0 {
                *running *= value;
            }
        }
        ChainBonus { value, cap } => {
            let chain = ctx.words_found.len() as u32;
            let chain = cap.map_or(chain, |cap| chain.min(cap));
            *running += value * f64::from(chain);
        }
        GoldenCellMultiplier => {
            let golden = ctx
                .path
                .iter()
                .filter(|coords| ctx.golden_cells.contains(coords))
                .count();
            if golden > 0 {
                *running *= 1.0 + 2.0 * golden as f64;
            }
        }
        ExponentialGrowth { base, cap } => {
            let exponent = ctx.words_found.len().min(cap as usize) as i32;
            *running *= base.powi(exponent);
        }
        WordEcho { chance } => {
            if rng.random::<f64>() < chance {
                *running *= 2.0;
            }
        }
        GoldenLetters { chance, multiplier } => {
            if rng.random::<f64>() < chance {
                *running *= multiplier;
            }
        }
        CoinMultiplier { .. } | CoinPerWord { .. } | ScoreToCoins { .. } | LuckyCoins { .. }
        | TimeExtender { .. } => {}
        Unknown => {
            log::debug!("ignoring unrecognized modifier kind while scoring {word:?}");
        }
    }
}

/// Coin reward for a word, computed from the same base-score value as the
/// point score but otherwise independent of it. Flat payouts accumulate
/// first; coin multipliers then compose multiplicatively as `1 + value`.
pub fn coin_bonus<R: Rng + ?Sized>(word: &str, ctx: &ScoreContext<'_>, rng: &mut R) -> u32 {
    use Modifier::*;

    let base = f64::from(base_score(word));
    let mut flat = 0.0;
    let mut multiplier = 1.0;

    for modifier in ctx.modifiers {
        match *modifier {
            CoinPerWord { value } => flat += value,
            ScoreToCoins { ratio } => flat += (base * ratio).floor(),
            LuckyCoins { chance, amount } => {
                if rng.random::<f64>() < chance {
                    flat += amount;
                }
            }
            CoinMultiplier { value } => multiplier *= 1.0 + value,
            _ => {}
        }
    }

    (flat * multiplier).floor().max(0.0) as u32
}

/// Seconds of extra clock granted by time-extension modifiers.
pub fn time_extension(ctx: &ScoreContext<'_>) -> u32 {
    ctx.modifiers
        .iter()
        .map(|modifier| match *modifier {
            Modifier::TimeExtender { seconds } => seconds,
            _ => 0,
        })
        .sum()
}
