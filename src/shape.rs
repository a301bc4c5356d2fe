use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use eyre::Report;

/// Which kind of document to decode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// List of leaderboard entries
    Leaderboard,
    /// List of hall of fame entries
    HallOfFame,
    /// Single artist profile
    Profile,
    /// Single artwork
    Artwork,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Leaderboard => "Leaderboard",
            Self::HallOfFame => "Hall of Fame",
            Self::Profile => "Artist profile",
            Self::Artwork => "Artwork",
        };

        f.write_str(name)
    }
}

impl FromStr for Shape {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        match s.as_str() {
            "leaderboard" | "lb" => Ok(Self::Leaderboard),
            "hall-of-fame" | "halloffame" | "hof" => Ok(Self::HallOfFame),
            "profile" => Ok(Self::Profile),
            "artwork" => Ok(Self::Artwork),
            _ => {
                let msg = format!(
                    "Failed to parse shape `{s}`; must be either of the following: \n\
                    leaderboard, hall-of-fame, profile, artwork"
                );

                Err(Report::msg(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!("LB".parse::<Shape>().unwrap(), Shape::Leaderboard);
        assert_eq!("Leaderboard".parse::<Shape>().unwrap(), Shape::Leaderboard);
        assert_eq!("hof".parse::<Shape>().unwrap(), Shape::HallOfFame);
        assert_eq!("HallOfFame".parse::<Shape>().unwrap(), Shape::HallOfFame);
        assert_eq!(" Hall-Of-Fame ".parse::<Shape>().unwrap(), Shape::HallOfFame);
        assert_eq!("profile".parse::<Shape>().unwrap(), Shape::Profile);
        assert_eq!("ARTWORK".parse::<Shape>().unwrap(), Shape::Artwork);
    }

    #[test]
    fn unknown() {
        let err = "gallery".parse::<Shape>().unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("`gallery`"));
        assert!(msg.contains("hall-of-fame"));
    }
}
