use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use eyre::Report;
use serde::{
    de::{Error as DeError, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Achievement tier awarded to an artist.
///
/// The set of badges is closed; naming anything else does not compile:
///
/// ```compile_fail
/// use fanart_community::model::BadgeType;
///
/// let badge = BadgeType::TopFan;
/// ```
///
/// On the wire each badge is its display label, e.g. `"Rising Artist"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BadgeType {
    RisingArtist,
    CommunityFavorite,
    MonthlyChampion,
    LegendaryCreator,
}

impl BadgeType {
    pub const ALL: [Self; 4] = [
        Self::RisingArtist,
        Self::CommunityFavorite,
        Self::MonthlyChampion,
        Self::LegendaryCreator,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RisingArtist => "Rising Artist",
            Self::CommunityFavorite => "Community Favorite",
            Self::MonthlyChampion => "Monthly Champion",
            Self::LegendaryCreator => "Legendary Creator",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|badge| badge.as_str() == label)
    }
}

impl Display for BadgeType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeType {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| {
            eyre!(
                "Unknown badge `{s}`; must be one of the following: \n\
                Rising Artist, Community Favorite, Monthly Champion, Legendary Creator"
            )
        })
    }
}

impl Serialize for BadgeType {
    #[inline]
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BadgeType {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_str(BadgeVisitor)
    }
}

struct BadgeVisitor;

impl Visitor<'_> for BadgeVisitor {
    type Value = BadgeType;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("one of \"Rising Artist\", \"Community Favorite\", \"Monthly Champion\", \"Legendary Creator\"")
    }

    fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
        BadgeType::from_label(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}
