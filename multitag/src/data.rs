use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// The basic text fields every supported tag format can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Artist,
    Title,
    Album,
    Genre,
    Comment,
}

impl TextField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Title => "Title",
            Self::Album => "Album",
            Self::Genre => "Genre",
            Self::Comment => "Comment",
        }
    }
}

/// A named entry of the property map.
///
/// The names follow the common tag mapping used by most taggers (mp3tag, foobar2000, TagLib),
/// so the same name addresses the right frame, atom or comment in every format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    Subtitle,
    AlbumArtist,
    DiscNumber,
    DiscTotal,
    TrackNumber,
    TrackTotal,
    Composer,
    Copyright,
    Owner,
    EncodedBy,
    Isrc,
    /// Any name without a dedicated mapping, stored under a format-specific custom key.
    Custom(String),
}

impl Property {
    pub(crate) const KNOWN: [Self; 11] = [
        Self::Subtitle,
        Self::AlbumArtist,
        Self::DiscNumber,
        Self::DiscTotal,
        Self::TrackNumber,
        Self::TrackTotal,
        Self::Composer,
        Self::Copyright,
        Self::Owner,
        Self::EncodedBy,
        Self::Isrc,
    ];

    /// The canonical upper-case property name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Subtitle => "SUBTITLE",
            Self::AlbumArtist => "ALBUMARTIST",
            Self::DiscNumber => "DISCNUMBER",
            Self::DiscTotal => "DISCTOTAL",
            Self::TrackNumber => "TRACKNUMBER",
            Self::TrackTotal => "TRACKTOTAL",
            Self::Composer => "COMPOSER",
            Self::Copyright => "COPYRIGHT",
            Self::Owner => "OWNER",
            Self::EncodedBy => "ENCODEDBY",
            Self::Isrc => "ISRC",
            Self::Custom(name) => name.as_str(),
        }
    }

    /// Looks up a property by name, ignoring case. Unknown names become [`Property::Custom`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .unwrap_or_else(|| Self::Custom(name.to_owned()))
    }

    /// Whether the value must be a number. Numeric properties treat `0` as "clear".
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::DiscNumber | Self::DiscTotal | Self::TrackNumber | Self::TrackTotal
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to a single [`Property`] write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyOutcome {
    Stored,
    Removed,
    /// The tag format has no place for this property. The tag is left unchanged.
    Rejected,
}

/// A single property value as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
}

/// The items of one tag, under the names the tag format itself uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagListing {
    pub tag_type: String,
    pub items: Vec<(String, Vec<String>)>,
    pub pictures: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AudioInfo {
    /// Kbps
    pub bitrate: u32,
    /// Hz
    pub sample_rate: u32,
    pub channels: u8,
    pub bit_depth: Option<u8>,
    #[serde(serialize_with = "serialize_secs")]
    pub duration: Duration,
}

/// Everything printed for a file when no edits are requested.
#[derive(Debug, Clone, Serialize)]
pub struct FileDescription {
    pub path: String,
    pub file_type: String,
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: u32,
    pub track: u32,
    pub genre: String,
    pub comment: String,
    /// Sorted by key, one entry per value.
    pub properties: Vec<PropertyEntry>,
    pub tags: Vec<TagListing>,
    pub audio: AudioInfo,
}

fn serialize_secs<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64())
}
