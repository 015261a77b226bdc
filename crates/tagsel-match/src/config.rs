use crate::error::Error;
use std::str::FromStr;

/// Restriction on the presence of the SetUp tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupMode {
    /// No restriction.
    #[default]
    Any,
    /// Only records without a SetUp tag.
    Absent,
    /// Only records with a SetUp tag.
    Required,
}

impl FromStr for SetupMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(SetupMode::Any),
            "none" => Ok(SetupMode::Absent),
            "only" => Ok(SetupMode::Required),
            other => Err(Error::UnknownSetupMode(other.to_string())),
        }
    }
}

/// Settings fixed before any criteria are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Compare name-like tags by their phonetic codes.
    pub use_soundex: bool,
    /// Plain patterns may match anywhere in a value, not just as a prefix.
    pub match_anywhere: bool,
    pub setup: SetupMode,
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn soundex(mut self, enabled: bool) -> Self {
        self.use_soundex = enabled;
        self
    }

    pub fn anywhere(mut self, enabled: bool) -> Self {
        self.match_anywhere = enabled;
        self
    }

    pub fn setup(mut self, mode: SetupMode) -> Self {
        self.setup = mode;
        self
    }
}
