//! Search modes and the display caps attached to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which slice of the backend ranking the user asked for.
///
/// The wire form is the lowercase variant name (`strict`, `best`, `hype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// "Top Local Picks": strong ratings, deep local reviews, no chains.
    #[default]
    Strict,
    /// "Best Available": dependable options when the strict list is thin.
    Best,
    /// "Hype": popular, talked-about places that still rate well.
    Hype,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mode '{0}' (expected strict, best, or hype)")]
pub struct ModeParseError(pub String);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Strict, Mode::Best, Mode::Hype];

    /// Maximum distance in miles a pick may report and still be displayed.
    ///
    /// These caps are fixed in the client and never taken from the server.
    #[must_use]
    pub const fn cap_miles(self) -> u32 {
        match self {
            Mode::Strict => 10,
            Mode::Best => 15,
            Mode::Hype => 25,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Best => "best",
            Mode::Hype => "hype",
        }
    }

    /// Human-facing name shown on the mode chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Strict => "Top Local Picks",
            Mode::Best => "Best Available",
            Mode::Hype => "Hype",
        }
    }

    /// Text for the "Why locals trust these picks" panel.
    #[must_use]
    pub const fn why_text(self) -> &'static str {
        match self {
            Mode::Strict => {
                "These are the safest local picks — strong ratings, deep local reviews, no chains."
            }
            Mode::Best => "These are solid options for this area. Not perfect, but dependable.",
            Mode::Hype => {
                "These places have buzz — more popular, more talked about, still rated well."
            }
        }
    }

    /// Label for a mode string echoed back by the backend. Anything that is
    /// not `strict` or `best` reads as Hype.
    #[must_use]
    pub fn label_for_wire(raw: &str) -> &'static str {
        raw.parse::<Mode>().unwrap_or(Mode::Hype).label()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Mode::Strict),
            "best" => Ok(Mode::Best),
            "hype" => Ok(Mode::Hype),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}
