use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown room type: {0}")]
pub struct ParseRoomError(pub String);

/// The room a booking reserves. `Unassigned` stands in for the empty room
/// value and serializes as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    #[serde(rename = "")]
    Unassigned,
    Meeting,
    Conference,
    Event,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Unassigned,
        RoomType::Meeting,
        RoomType::Conference,
        RoomType::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Unassigned => "",
            RoomType::Meeting => "meeting",
            RoomType::Conference => "conference",
            RoomType::Event => "event",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RoomType::Unassigned => RoomType::Meeting,
            RoomType::Meeting => RoomType::Conference,
            RoomType::Conference => RoomType::Event,
            RoomType::Event => RoomType::Unassigned,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RoomType::Unassigned => RoomType::Event,
            RoomType::Meeting => RoomType::Unassigned,
            RoomType::Conference => RoomType::Meeting,
            RoomType::Event => RoomType::Conference,
        }
    }
}

impl FromStr for RoomType {
    type Err = ParseRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "unassigned" => Ok(RoomType::Unassigned),
            "meeting" => Ok(RoomType::Meeting),
            "conference" => Ok(RoomType::Conference),
            "event" => Ok(RoomType::Event),
            _ => Err(ParseRoomError(s.to_string())),
        }
    }
}

/// Which bookings the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomFilter {
    #[default]
    All,
    Only(RoomType),
}

impl RoomFilter {
    pub fn matches(&self, room: RoomType) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Only(selected) => *selected == room,
        }
    }

    /// Cycle order used by the filter key: all, each assigned room, then unassigned.
    pub fn next(self) -> Self {
        match self {
            RoomFilter::All => RoomFilter::Only(RoomType::Meeting),
            RoomFilter::Only(RoomType::Meeting) => RoomFilter::Only(RoomType::Conference),
            RoomFilter::Only(RoomType::Conference) => RoomFilter::Only(RoomType::Event),
            RoomFilter::Only(RoomType::Event) => RoomFilter::Only(RoomType::Unassigned),
            RoomFilter::Only(RoomType::Unassigned) => RoomFilter::All,
        }
    }
}

impl FromStr for RoomFilter {
    type Err = ParseRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" | "*" => Ok(RoomFilter::All),
            other => other.parse().map(RoomFilter::Only).map_err(|_| ParseRoomError(s.to_string())),
        }
    }
}

impl From<Option<RoomType>> for RoomFilter {
    fn from(value: Option<RoomType>) -> Self {
        value.map_or(RoomFilter::All, RoomFilter::Only)
    }
}
