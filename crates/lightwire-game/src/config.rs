use std::num::NonZero;

/// Settings for a game session's undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of undoable turns kept.
    pub capacity: NonZero<usize>,
}

impl HistoryConfig {
    /// Default undo capacity.
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(5000).unwrap()
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(HistoryConfig::default_capacity().get(), 5000);
        assert_eq!(
            HistoryConfig::default().capacity,
            HistoryConfig::default_capacity()
        );
    }
}
