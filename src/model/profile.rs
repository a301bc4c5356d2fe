use serde::{Deserialize, Serialize};

use super::BadgeType;

/// All submissions and badges of one artist.
///
/// `total_votes` is stored as given and may differ from the sum of the
/// artworks' votes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub artist_name: Box<str>,
    pub submitted_artworks: Vec<ArtistArtwork>,
    pub total_votes: u32,
    pub badges: Vec<BadgeType>,
}

impl ArtistProfile {
    pub fn featured_artworks(&self) -> impl Iterator<Item = &ArtistArtwork> {
        self.submitted_artworks
            .iter()
            .filter(|artwork| artwork.featured)
    }
}

/// A single submitted piece.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistArtwork {
    pub id: Box<str>,
    pub artwork_title: Box<str>,
    pub image_url: Box<str>,
    pub votes: u32,
    pub featured: bool,
}
