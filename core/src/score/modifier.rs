use serde::{Deserialize, Serialize};

fn default_growth_cap() -> u32 {
    3
}

/// Catalog of acquirable score and coin effects ("powers"). Instances are
/// created by the shop/reward layer and passed into scoring by reference;
/// the engine never owns or mutates them.
///
/// The union is closed for scoring purposes: every variant has an exhaustive
/// arm in the engine. Foreign kinds only appear at the deserialization
/// boundary, where they collapse into [`Modifier::Unknown`] and score as a
/// no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Modifier {
    /// Adds `value` points per letter of the word.
    FlatPerLetter { value: f64 },
    /// Adds `value` points per vowel in the word.
    VowelBonus { value: f64 },
    /// Adds `value` points per rare letter (J, Q, X, Z) in the word.
    RareLetterBonus { value: f64 },
    /// Adds a flat `value` to the running score.
    BaseScoreBonus { value: f64 },
    /// Multiplies the running score when the word is at least `min_length`
    /// letters long.
    LengthThresholdMultiplier { min_length: usize, multiplier: f64 },
    /// Multiplies the running score when the word is at most `max_length`
    /// letters long.
    ShortWordMultiplier { max_length: usize, multiplier: f64 },
    /// Unconditional score multiplier.
    LetterMultiplier { value: f64 },
    /// Multiplies every `interval`-th accepted word, counting the one being
    /// scored.
    AvalancheBonus { interval: u32, value: f64 },
    /// Adds `value` points per word already found this session, optionally
    /// capped.
    ChainBonus {
        value: f64,
        #[serde(default)]
        cap: Option<u32>,
    },
    /// Each golden cell on the path triples its marginal contribution:
    /// the running score is multiplied by `1 + 2 * golden_count`.
    GoldenCellMultiplier,
    /// Multiplies by `base ^ min(words_found, cap)`.
    ExponentialGrowth {
        base: f64,
        #[serde(default = "default_growth_cap")]
        cap: u32,
    },
    /// Probability-gated: the word scores twice with probability `chance`.
    WordEcho { chance: f64 },
    /// Probability-gated score multiplier.
    GoldenLetters { chance: f64, multiplier: f64 },
    /// Coin reward multiplied by `1 + value`. Coin-side only.
    CoinMultiplier { value: f64 },
    /// Flat coins per accepted word. Coin-side only.
    CoinPerWord { value: f64 },
    /// Converts a fraction of the base score into coins. Coin-side only.
    ScoreToCoins { ratio: f64 },
    /// Probability-gated flat coin payout. Coin-side only.
    LuckyCoins { chance: f64, amount: f64 },
    /// Extends the session clock; consumed by `time_extension`, not scoring.
    TimeExtender { seconds: u32 },
    /// Catch-all for modifier kinds this engine does not know. Ignored.
    #[serde(other)]
    Unknown,
}

impl Modifier {
    /// True for kinds that can change the point score of a word.
    pub const fn affects_score(&self) -> bool {
        !matches!(
            self,
            Self::CoinMultiplier { .. }
                | Self::CoinPerWord { .. }
                | Self::ScoreToCoins { .. }
                | Self::LuckyCoins { .. }
                | Self::TimeExtender { .. }
                | Self::Unknown
        )
    }

    /// True for kinds whose outcome depends on a random draw.
    pub const fn is_probability_gated(&self) -> bool {
        matches!(
            self,
            Self::WordEcho { .. } | Self::GoldenLetters { .. } | Self::LuckyCoins { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trips_through_tagged_json() {
        let raw = r#"{"kind":"lengthThresholdMultiplier","min_length":6,"multiplier":4.0}"#;
        let modifier: Modifier = serde_json::from_str(raw).unwrap();
        assert_eq!(
            modifier,
            Modifier::LengthThresholdMultiplier {
                min_length: 6,
                multiplier: 4.0
            }
        );
    }

    #[test]
    fn growth_cap_defaults_to_three() {
        let modifier: Modifier =
            serde_json::from_str(r#"{"kind":"exponentialGrowth","base":2.0}"#).unwrap();
        assert_eq!(
            modifier,
            Modifier::ExponentialGrowth { base: 2.0, cap: 3 }
        );
    }

    #[test]
    fn short_word_gate_round_trips() {
        let raw = r#"{"kind":"shortWordMultiplier","max_length":4,"multiplier":3.0}"#;
        let modifier: Modifier = serde_json::from_str(raw).unwrap();
        assert_eq!(
            modifier,
            Modifier::ShortWordMultiplier {
                max_length: 4,
                multiplier: 3.0
            }
        );
        assert!(modifier.affects_score());
    }

    #[test]
    fn foreign_kinds_become_unknown() {
        let modifier: Modifier =
            serde_json::from_str(r#"{"kind":"realityHack","enabled":true}"#).unwrap();
        assert_eq!(modifier, Modifier::Unknown);
        assert!(!modifier.affects_score());
    }

    #[test]
    fn coin_kinds_do_not_touch_the_score() {
        assert!(!Modifier::CoinPerWord { value: 2.0 }.affects_score());
        assert!(!Modifier::TimeExtender { seconds: 45 }.affects_score());
        assert!(Modifier::ChainBonus { value: 10.0, cap: None }.affects_score());
    }
}
