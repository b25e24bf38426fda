use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Custom { lower: i64, upper: i64, ceiling: u32 },
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn presets() -> Vec<Difficulty> {
        vec![
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Validated constructor for player-entered bounds.
    pub fn custom(lower: i64, upper: i64, ceiling: u32) -> Result<Difficulty, GameError> {
        if lower >= upper {
            return Err(GameError::InvalidBounds { lower, upper });
        }
        if ceiling == 0 {
            return Err(GameError::InvalidCeiling);
        }
        Ok(Difficulty::Custom {
            lower,
            upper,
            ceiling,
        })
    }

    pub fn bounds(&self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 50),
            Difficulty::Medium => (1, 100),
            Difficulty::Hard => (1, 200),
            Difficulty::Expert => (1, 500),
            Difficulty::Custom { lower, upper, .. } => (*lower, *upper),
        }
    }

    pub fn ceiling(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
            Difficulty::Expert => 3,
            Difficulty::Custom { ceiling, .. } => *ceiling,
        }
    }

    pub fn label(&self) -> String {
        let (lower, upper) = self.bounds();
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::Custom { .. } => "Custom",
        };
        format!(
            "{} ({}-{}, {} attempts)",
            name,
            lower,
            upper,
            self.ceiling()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        assert_eq!(Difficulty::Easy.bounds(), (1, 50));
        assert_eq!(Difficulty::Easy.ceiling(), 10);
        assert_eq!(Difficulty::Medium.bounds(), (1, 100));
        assert_eq!(Difficulty::Medium.ceiling(), 7);
        assert_eq!(Difficulty::Hard.bounds(), (1, 200));
        assert_eq!(Difficulty::Hard.ceiling(), 5);
        assert_eq!(Difficulty::Expert.bounds(), (1, 500));
        assert_eq!(Difficulty::Expert.ceiling(), 3);
        assert_eq!(Difficulty::presets().len(), 4);
    }

    #[test]
    fn test_custom_validation() {
        assert!(matches!(
            Difficulty::custom(10, 10, 5),
            Err(GameError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Difficulty::custom(20, 10, 5),
            Err(GameError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Difficulty::custom(1, 100, 0),
            Err(GameError::InvalidCeiling)
        ));

        let custom = Difficulty::custom(-5, 5, 4).expect("valid custom difficulty");
        assert_eq!(custom.bounds(), (-5, 5));
        assert_eq!(custom.ceiling(), 4);
    }
}
