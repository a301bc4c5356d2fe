use serde::{Deserialize, Serialize};

use super::BadgeType;

/// One ranked row of the artist leaderboard.
///
/// `rank` comes from whatever produced the snapshot and is not checked
/// against `total_votes`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistLeaderboardEntry {
    pub artist_name: Box<str>,
    pub rank: u32,
    pub total_votes: u32,
    pub submitted_count: u32,
    /// In display order; may be empty.
    pub badges: Vec<BadgeType>,
}
