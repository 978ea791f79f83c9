use std::fmt;
use std::str::FromStr;

/// How far ahead the engine searches.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum Difficulty {
    Low,
    Middle,
    High,
}

impl Difficulty {
    /// Every difficulty, hardest first, in the order they are offered to a client.
    pub const ALL: [Difficulty; 3] = [Difficulty::High, Difficulty::Middle, Difficulty::Low];

    /// The search depth in plies.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Low => 6,
            Difficulty::Middle => 10,
            Difficulty::High => 14,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Low
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let difficulty_str = match self {
            Difficulty::Low => "LOW",
            Difficulty::Middle => "MIDDLE",
            Difficulty::High => "HIGH",
        };
        write!(f, "{}", difficulty_str)
    }
}

// used for parsing cli args and protocol commands
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty.to_uppercase().as_str() {
            "LOW" => Ok(Difficulty::Low),
            "MIDDLE" => Ok(Difficulty::Middle),
            "HIGH" => Ok(Difficulty::High),
            _ => Err("invalid difficulty; options are: HIGH, MIDDLE, LOW"),
        }
    }
}
