//! Mapping between property names and the keys each tag format stores them under.

use lofty::tag::{ItemKey, TagType};

use crate::data::Property;

/// iTunes keeps everything without a dedicated atom in freeform atoms of this namespace.
pub(crate) const ITUNES_FREEFORM_PREFIX: &str = "----:com.apple.iTunes:";

impl Property {
    pub(crate) fn item_key(&self, tag_type: TagType) -> ItemKey {
        match self {
            Self::Subtitle => ItemKey::TrackSubtitle,
            Self::AlbumArtist => ItemKey::AlbumArtist,
            Self::DiscNumber => ItemKey::DiscNumber,
            Self::DiscTotal => ItemKey::DiscTotal,
            Self::TrackNumber => ItemKey::TrackNumber,
            Self::TrackTotal => ItemKey::TrackTotal,
            Self::Composer => ItemKey::Composer,
            Self::Copyright => ItemKey::CopyrightMessage,
            Self::Owner => ItemKey::FileOwner,
            Self::EncodedBy => ItemKey::EncodedBy,
            Self::Isrc => ItemKey::Isrc,
            Self::Custom(name) => custom_item_key(tag_type, name),
        }
    }

    pub(crate) fn from_item_key(key: &ItemKey) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|p| p.item_key(TagType::VorbisComments) == *key)
    }
}

fn custom_item_key(tag_type: TagType, name: &str) -> ItemKey {
    match tag_type {
        TagType::Mp4Ilst if !name.starts_with("----:") => {
            ItemKey::Unknown(format!("{ITUNES_FREEFORM_PREFIX}{name}"))
        }
        _ => ItemKey::Unknown(name.to_owned()),
    }
}

/// The format independent name of a key, as used in the property map.
pub(crate) fn property_name(key: &ItemKey) -> String {
    if let Some(property) = Property::from_item_key(key) {
        return property.name().to_owned();
    }

    match key {
        ItemKey::Unknown(name) => name
            .strip_prefix(ITUNES_FREEFORM_PREFIX)
            .unwrap_or(name)
            .to_owned(),
        _ => key
            .map_key(TagType::VorbisComments, false)
            .map_or_else(|| format!("{key:?}").to_ascii_uppercase(), str::to_owned),
    }
}

/// The name a key is stored under in the given tag format.
pub(crate) fn native_name(key: &ItemKey, tag_type: TagType) -> String {
    match (key.map_key(tag_type, true), key) {
        (Some(name), _) => name.to_owned(),
        (None, ItemKey::Unknown(name)) => name.clone(),
        (None, _) => format!("{key:?}"),
    }
}
