pub use self::{
    badge::BadgeType,
    hall_of_fame::HallOfFameEntry,
    leaderboard::ArtistLeaderboardEntry,
    profile::{ArtistArtwork, ArtistProfile},
};

mod badge;
mod hall_of_fame;
mod leaderboard;
mod profile;
