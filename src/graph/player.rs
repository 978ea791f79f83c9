use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The two sides of a match. The discriminant is the player id carried in
/// game-over events.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Human = 0,
    Engine = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Human, Player::Engine];

    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Engine,
            Player::Engine => Player::Human,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::Human),
            1 => Ok(Player::Engine),
            _ => Err("invalid player id; options are: 0 (human), 1 (engine)"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Human => "human",
            Player::Engine => "engine",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player.to_lowercase().as_str() {
            "human" => Ok(Player::Human),
            "engine" => Ok(Player::Engine),
            _ => Err("invalid player; options are: human, engine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Engine);
        assert_eq!(Player::Engine.opponent(), Player::Human);
    }

    #[test]
    fn test_ids() {
        assert_eq!(Player::Human.id(), 0);
        assert_eq!(Player::Engine.id(), 1);
        assert_eq!(Player::try_from(1u8), Ok(Player::Engine));
        assert!(Player::try_from(2u8).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Player::from_str("Human").unwrap(), Player::Human);
        assert_eq!(Player::from_str("engine").unwrap(), Player::Engine);
        assert!(Player::from_str("bot").is_err());
    }
}
