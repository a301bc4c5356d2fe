use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    io::Read,
    path::Path,
};

use eyre::{Context as _, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    model::{ArtistArtwork, ArtistLeaderboardEntry, ArtistProfile, HallOfFameEntry},
    shape::Shape,
};

/// A decoded JSON document of one of the known shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Leaderboard(Vec<ArtistLeaderboardEntry>),
    HallOfFame(Vec<HallOfFameEntry>),
    Profile(ArtistProfile),
    Artwork(ArtistArtwork),
}

impl Document {
    pub fn from_slice(shape: Shape, bytes: &[u8]) -> Result<Self> {
        trace!("decoding {} bytes as {shape}", bytes.len());

        match shape {
            Shape::Leaderboard => decode(shape, bytes).map(Self::Leaderboard),
            Shape::HallOfFame => decode(shape, bytes).map(Self::HallOfFame),
            Shape::Profile => decode(shape, bytes).map(Self::Profile),
            Shape::Artwork => decode(shape, bytes).map(Self::Artwork),
        }
    }

    pub fn from_reader<R: Read>(shape: Shape, mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();

        reader
            .read_to_end(&mut bytes)
            .context("failed to read input")?;

        Self::from_slice(shape, &bytes)
    }

    pub fn from_path(shape: Shape, path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read file `{}`", path.display()))?;

        Self::from_slice(shape, &bytes)
            .with_context(|| format!("invalid content in `{}`", path.display()))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Leaderboard(_) => Shape::Leaderboard,
            Self::HallOfFame(_) => Shape::HallOfFame,
            Self::Profile(_) => Shape::Profile,
            Self::Artwork(_) => Shape::Artwork,
        }
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

fn decode<T: DeserializeOwned>(shape: Shape, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).with_context(|| format!("failed to decode {shape}"))
}

/// One-line description of a [`Document`].
pub struct Summary<'d>(&'d Document);

impl Display for Summary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Document::Leaderboard(entries) => {
                let badges: usize = entries.iter().map(|entry| entry.badges.len()).sum();

                write!(
                    f,
                    "Leaderboard with {} holding {}",
                    Count::new(entries.len(), "entry", "entries"),
                    Count::new(badges, "badge", "badges"),
                )
            }
            Document::HallOfFame(entries) => {
                let credited = entries
                    .iter()
                    .filter(|entry| entry.credit_link.is_some())
                    .count();

                write!(
                    f,
                    "Hall of Fame with {}, {credited} credited",
                    Count::new(entries.len(), "entry", "entries"),
                )
            }
            Document::Profile(profile) => write!(
                f,
                "Artist profile `{}` with {} ({} featured) and {}",
                profile.artist_name,
                Count::new(profile.submitted_artworks.len(), "artwork", "artworks"),
                profile.featured_artworks().count(),
                Count::new(profile.badges.len(), "badge", "badges"),
            ),
            Document::Artwork(artwork) => write!(
                f,
                "Artwork `{}` ({}) with {}{}",
                artwork.artwork_title,
                artwork.id,
                Count::new(artwork.votes as usize, "vote", "votes"),
                if artwork.featured { ", featured" } else { "" },
            ),
        }
    }
}

struct Count {
    n: usize,
    noun: &'static str,
}

impl Count {
    fn new(n: usize, singular: &'static str, plural: &'static str) -> Self {
        let noun = if n == 1 { singular } else { plural };

        Self { n, noun }
    }
}

impl Display for Count {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.n, self.noun)
    }
}
