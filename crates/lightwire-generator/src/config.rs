use std::num::NonZero;

/// Tuning for [`Scrambler`](crate::Scrambler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// Number of unconditional random turns applied before the guarantee phase.
    pub seed_rounds: usize,
    /// Upper bound on guarantee-phase rounds before giving up.
    pub max_guarantee_rounds: NonZero<usize>,
}

impl ScrambleConfig {
    /// Default number of seed-phase rounds.
    pub const DEFAULT_SEED_ROUNDS: usize = 10;

    /// Default guarantee-phase bound.
    #[must_use]
    pub const fn default_max_guarantee_rounds() -> NonZero<usize> {
        NonZero::new(100_000).unwrap()
    }
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            seed_rounds: Self::DEFAULT_SEED_ROUNDS,
            max_guarantee_rounds: Self::default_max_guarantee_rounds(),
        }
    }
}
