use std::path::PathBuf;

use clap::Parser;
use fanart_community::Shape;

pub struct Args {
    pub shape: Shape,
    pub input: Option<PathBuf>,
    pub echo: bool,
    pub quiet: bool,
}

impl Args {
    pub fn parse() -> Self {
        let ArgsCli {
            shape,
            input,
            echo,
            quiet,
        } = ArgsCli::parse();

        Self {
            shape,
            input,
            echo,
            quiet,
        }
    }
}

#[derive(Parser)]
#[clap(author, about = DESCRIPTION)]
struct ArgsCli {
    /// Kind of document to decode
    shape: Shape,
    /// JSON file to decode; reads stdin if omitted
    input: Option<PathBuf>,
    #[clap(short, long, action)]
    /// Print the decoded document back as pretty JSON
    echo: bool,
    #[clap(short, long, action)]
    /// Set this if no logs should be displayed
    quiet: bool,
}

static DESCRIPTION: &str = r#"
Decode fan art community documents and check them against
the expected data shapes.

Shape values:
  - leaderboard (lb): A list of artist leaderboard entries.
  - hall-of-fame (hof): A list of hall of fame entries.
  - profile: A single artist profile including its artworks.
  - artwork: A single artwork.

Badges must be one of:
  Rising Artist, Community Favorite, Monthly Champion, Legendary Creator"#;
