use std::borrow::Cow;
use std::collections::BTreeMap;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey, ItemValue, Tag};

use crate::{TagFile, id3v23_year_key};
use crate::data::{AudioInfo, FileDescription, PropertyEntry, TagListing};
use crate::property::{native_name, property_name};

impl TagFile {
    /// Collects the basic fields, the property map, every tag under its native names and the
    /// audio properties.
    #[must_use]
    pub fn describe(&self) -> FileDescription {
        let tag = self.tag();
        let text = |get: for<'a> fn(&'a Tag) -> Option<Cow<'a, str>>| {
            tag.and_then(get).map(|v| v.into_owned()).unwrap_or_default()
        };

        FileDescription {
            path: self.path.display().to_string(),
            file_type: self.file_type_name(),
            artist: text(Tag::artist),
            title: text(Tag::title),
            album: text(Tag::album),
            year: tag.map_or(0, year),
            track: tag.and_then(Tag::track).unwrap_or_default(),
            genre: text(Tag::genre),
            comment: text(Tag::comment),
            properties: tag.map(properties).unwrap_or_default(),
            tags: self
                .tag_types()
                .into_iter()
                .filter_map(|tag_type| self.inner.tag(tag_type))
                .map(listing)
                .collect(),
            audio: self.audio_info(),
        }
    }

    fn audio_info(&self) -> AudioInfo {
        let props = self.inner.properties();
        AudioInfo {
            bitrate: props
                .audio_bitrate()
                .or_else(|| props.overall_bitrate())
                .unwrap_or_default(),
            sample_rate: props.sample_rate().unwrap_or_default(),
            channels: props.channels().unwrap_or_default(),
            bit_depth: props.bit_depth(),
            duration: props.duration(),
        }
    }
}

/// Leading digits of the recording date, so `2004-05-01` and `2004` both give 2004.
fn year(tag: &Tag) -> u32 {
    [ItemKey::RecordingDate, ItemKey::Year, id3v23_year_key()]
        .iter()
        .filter_map(|key| tag.get_string(key))
        .find_map(|date| {
            let digits: String = date
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
        .unwrap_or_default()
}

fn properties(tag: &Tag) -> Vec<PropertyEntry> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in tag.items() {
        if let Some(value) = item.value().text() {
            map.entry(property_name(item.key()))
                .or_default()
                .push(value.to_owned());
        }
    }

    map.into_iter()
        .flat_map(|(key, values)| {
            values
                .into_iter()
                .map(move |value| PropertyEntry {
                    key: key.clone(),
                    value,
                })
        })
        .collect()
}

fn listing(tag: &Tag) -> TagListing {
    let tag_type = tag.tag_type();
    let mut items: Vec<(String, Vec<String>)> = Vec::new();
    for item in tag.items() {
        let name = native_name(item.key(), tag_type);
        let value = match item.value() {
            ItemValue::Text(text) | ItemValue::Locator(text) => text.clone(),
            ItemValue::Binary(data) => format!("<{} bytes of binary data>", data.len()),
        };
        match items.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => items.push((name, vec![value])),
        }
    }

    TagListing {
        tag_type: format!("{tag_type:?}"),
        items,
        pictures: tag.pictures().len(),
    }
}
