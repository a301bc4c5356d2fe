use serde::{Deserialize, Serialize};

/// Editorially written recognition of an artist.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameEntry {
    pub artist_name: Box<str>,
    pub featured_artwork_url: Box<str>,
    pub recognition_message: Box<str>,
    /// Free-form, unlike [`BadgeType`](super::BadgeType).
    pub achievements: Vec<Box<str>>,
    /// `None` if no credit link should be shown. An empty string is kept as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_link: Option<Box<str>>,
}

impl HallOfFameEntry {
    pub fn credit_link(&self) -> Option<&str> {
        self.credit_link.as_deref()
    }
}
