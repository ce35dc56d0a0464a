use std::fmt;
use std::str::FromStr;

use gloss_core::error::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TopikLevel {
    I,  // Beginner (levels 1-2)
    II, // Intermediate/advanced (levels 3-6)
}

impl TopikLevel {
    /// Parse level from string ("I", "1", "TOPIK I", ...)
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        let bare = upper.strip_prefix("TOPIK").unwrap_or(&upper).trim();
        match bare {
            "I" | "1" => Some(TopikLevel::I),
            "II" | "2" => Some(TopikLevel::II),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopikLevel::I => "I",
            TopikLevel::II => "II",
        }
    }
}

impl fmt::Display for TopikLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which levels a scan annotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    I,
    II,
    #[default]
    All,
}

impl LevelFilter {
    pub fn admits(&self, level: TopikLevel) -> bool {
        match self {
            LevelFilter::I => level == TopikLevel::I,
            LevelFilter::II => level == TopikLevel::II,
            LevelFilter::All => true,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(LevelFilter::All);
        }
        match TopikLevel::parse(s) {
            Some(TopikLevel::I) => Ok(LevelFilter::I),
            Some(TopikLevel::II) => Ok(LevelFilter::II),
            None => Err(ConfigurationError::UnknownLevel(s.to_string())),
        }
    }
}
