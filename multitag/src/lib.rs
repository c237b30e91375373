#![doc = include_str!("../README.md")]

pub mod data;
mod describe;
#[cfg(any(test, feature = "fixtures"))]
#[doc(hidden)]
pub mod fixtures;
mod picture;
mod property;

pub use data::{
    AudioInfo, FileDescription, Property, PropertyEntry, PropertyOutcome, TagListing, TextField,
};

use lofty::config::WriteOptions;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{AudioFile, FileType, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, ItemValue, Tag, TagItem, TagType};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type.
///
/// Describes various errors that this crate could produce.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The format of the specified audio file could not be determined.
    #[error("Unsupported audio format")]
    UnsupportedAudioFormat,
    /// The file type has no tag format that can be written.
    #[error("{0:?} files cannot hold tags")]
    NoTagSupport(FileType),
    /// A numeric property was given something that is not a number.
    #[error("{property} must be a number, got {value:?}")]
    InvalidNumber { property: String, value: String },
    /// Specified cover image is not of a supported type.
    #[error("Given picture data is not a supported image (jpeg, png, gif, bmp, tiff)")]
    InvalidPicture,
    /// Wrapper around a [`LoftyError`]. See there for more info.
    #[error("{0}")]
    Lofty(#[from] LoftyError),
    /// An unspecified I/O error occurred.
    #[error("An I/O error occurred. Please see the contained io::Error for more info.")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// ID3v2 revision used for formats that carry ID3v2 tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Id3v2Version {
    /// Most compatible with older players and Windows Explorer.
    #[default]
    V3,
    V4,
}

/// Options for [`TagFile::save`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    pub id3v2_version: Id3v2Version,
}

impl SaveOptions {
    fn write_options(self, file_type: FileType) -> WriteOptions {
        let mut options = WriteOptions::new();
        if matches!(file_type, FileType::Mpeg | FileType::Wav | FileType::Aiff) {
            options = options.use_id3v23(self.id3v2_version == Id3v2Version::V3);
        }
        options
    }
}

/// ID3v2.3 frame holding the year. ID3v2.4 replaced it with `TDRC`.
const ID3V23_YEAR_FRAME: &str = "TYER";

fn id3v23_year_key() -> ItemKey {
    ItemKey::Unknown(ID3V23_YEAR_FRAME.to_owned())
}

/// Whether the extension of `path` belongs to a format that can be read.
#[must_use]
pub fn is_supported_path(path: &Path) -> bool {
    FileType::from_path(path).is_some()
}

/// An audio file together with all the tags read from it.
pub struct TagFile {
    path: PathBuf,
    inner: TaggedFile,
}

impl TagFile {
    /// Attempts to read the tags and audio properties from the given path.
    ///
    /// # Errors
    /// This function will error with [`Error::UnsupportedAudioFormat`] if the format of the file
    /// can't be determined, and with [`Error::Io`] or [`Error::Lofty`] if the file can't be read.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner = Probe::open(path)?
            .guess_file_type()?
            .read()
            .map_err(|e| {
                if matches!(e.kind(), ErrorKind::UnknownFormat) {
                    Error::UnsupportedAudioFormat
                } else {
                    Error::Lofty(e)
                }
            })?;

        debug!(
            "Read {} as {:?} with {} tag(s)",
            path.display(),
            inner.file_type(),
            inner.tags().len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_type(&self) -> FileType {
        self.inner.file_type()
    }

    /// A short human readable name of the container format.
    #[must_use]
    pub fn file_type_name(&self) -> String {
        match self.inner.file_type() {
            FileType::Mpeg => "MPEG".to_string(),
            FileType::Mp4 => "MP4".to_string(),
            FileType::Flac => "FLAC".to_string(),
            FileType::Aac => "AAC".to_string(),
            FileType::Aiff => "AIFF".to_string(),
            FileType::Ape => "APE".to_string(),
            FileType::Wav => "WAV".to_string(),
            FileType::WavPack => "WavPack".to_string(),
            FileType::Mpc => "Musepack".to_string(),
            FileType::Opus => "Ogg Opus".to_string(),
            FileType::Vorbis => "Ogg Vorbis".to_string(),
            FileType::Speex => "Ogg Speex".to_string(),
            other => format!("{other:?}"),
        }
    }

    /// The tag fields are read from. This is the primary tag of the format if present,
    /// otherwise the first tag found in the file.
    #[must_use]
    pub fn tag(&self) -> Option<&Tag> {
        self.inner.primary_tag().or_else(|| self.inner.first_tag())
    }

    /// The tag edits are written to, created if the file has none yet.
    ///
    /// A new tag starts out with the fields of the tag that was read instead, so an MP3 with
    /// only ID3v1 doesn't lose its fields behind an empty ID3v2 tag.
    fn tag_mut(&mut self) -> Result<&mut Tag> {
        let file_type = self.inner.file_type();
        let tag_type = self.inner.primary_tag_type();
        if self.inner.primary_tag().is_none() {
            let tag = match self.inner.first_tag() {
                Some(existing) => {
                    debug!(
                        "No {tag_type:?} tag in {}, creating one from its {:?} tag",
                        self.path.display(),
                        existing.tag_type()
                    );
                    seeded_tag(tag_type, existing)
                }
                None => {
                    debug!(
                        "No {tag_type:?} tag in {}, creating one",
                        self.path.display()
                    );
                    Tag::new(tag_type)
                }
            };
            self.inner.insert_tag(tag);
        }
        self.inner
            .tag_mut(tag_type)
            .ok_or(Error::NoTagSupport(file_type))
    }

    /// Runs `edit` on the tag edits are written to, then on every other tag of the file.
    fn for_each_tag(&mut self, mut edit: impl FnMut(&mut Tag)) -> Result<()> {
        edit(self.tag_mut()?);
        let primary = self.inner.primary_tag_type();
        for tag_type in self.tag_types() {
            if tag_type == primary {
                continue;
            }
            if let Some(tag) = self.inner.tag_mut(tag_type) {
                edit(tag);
            }
        }
        Ok(())
    }

    /// Sets one of the basic text fields in every tag of the file. An empty value removes the
    /// field.
    ///
    /// # Errors
    /// This function will error if the file type can't hold any tag.
    pub fn set_text(&mut self, field: TextField, value: &str) -> Result<()> {
        self.for_each_tag(|tag| {
            if value.is_empty() {
                match field {
                    TextField::Artist => tag.remove_artist(),
                    TextField::Title => tag.remove_title(),
                    TextField::Album => tag.remove_album(),
                    TextField::Genre => tag.remove_genre(),
                    TextField::Comment => tag.remove_comment(),
                }
                return;
            }

            let value = value.to_owned();
            match field {
                TextField::Artist => tag.set_artist(value),
                TextField::Title => tag.set_title(value),
                TextField::Album => tag.set_album(value),
                TextField::Genre => tag.set_genre(value),
                TextField::Comment => tag.set_comment(value),
            }
        })
    }

    /// Sets the release year in every tag of the file. `0` removes it.
    ///
    /// The year is stored as the recording date, which every format with a date field maps
    /// (`TDRC`, `DATE`, `©day`, `Year`, `ICRD`). ID3v1 only knows a year. ID3v2.3 tags get a
    /// `TYER` frame when saved.
    ///
    /// # Errors
    /// This function will error if the file type can't hold any tag.
    pub fn set_year(&mut self, year: u32) -> Result<()> {
        self.for_each_tag(|tag| {
            tag.remove_key(&ItemKey::Year);
            tag.remove_key(&id3v23_year_key());
            if year == 0 {
                tag.remove_key(&ItemKey::RecordingDate);
            } else if !tag.insert_text(ItemKey::RecordingDate, year.to_string()) {
                tag.insert_text(ItemKey::Year, year.to_string());
            }
        })
    }

    /// Sets the track number in every tag of the file. `0` removes it.
    ///
    /// # Errors
    /// This function will error if the file type can't hold any tag.
    pub fn set_track(&mut self, track: u32) -> Result<()> {
        self.for_each_tag(|tag| {
            if track == 0 {
                tag.remove_track();
            } else {
                tag.set_track(track);
            }
        })
    }

    /// Replaces a property of the property map. An empty value removes it, as does `0` for
    /// numeric properties.
    ///
    /// # Errors
    /// This function will error if a numeric property is given a value that is not a number,
    /// or if the file type can't hold any tag.
    pub fn set_property(&mut self, property: &Property, value: &str) -> Result<PropertyOutcome> {
        let tag = self.tag_mut()?;
        let tag_type = tag.tag_type();
        let key = property.item_key(tag_type);

        let value = if property.is_numeric() && !value.is_empty() {
            let number: u32 = value.parse().map_err(|_| Error::InvalidNumber {
                property: property.name().to_owned(),
                value: value.to_owned(),
            })?;
            if number == 0 { String::new() } else { number.to_string() }
        } else {
            value.to_owned()
        };

        if value.is_empty() {
            tag.remove_key(&key);
            return Ok(PropertyOutcome::Removed);
        }

        let stored = if matches!(property, Property::Custom(_)) && tag_type == TagType::Id3v2 {
            // lofty refuses unknown keys for ID3v2 but writes them as TXXX frames.
            tag.remove_key(&key);
            tag.push_unchecked(TagItem::new(key, ItemValue::Text(value)));
            true
        } else {
            tag.insert_text(key, value)
        };

        if stored {
            Ok(PropertyOutcome::Stored)
        } else {
            warn!(
                "{tag_type:?} tags of {} have no place for {property}",
                self.path.display()
            );
            Ok(PropertyOutcome::Rejected)
        }
    }

    /// Replaces all embedded pictures with the given front cover. `None` only removes them.
    ///
    /// Returns `false` if the tag format can't hold pictures, in which case nothing is changed.
    ///
    /// # Errors
    /// This function will error if `cover` is not a supported image, or if the file type can't
    /// hold any tag.
    pub fn set_front_cover(&mut self, cover: Option<&[u8]>) -> Result<bool> {
        let cover = cover.map(picture::front_cover).transpose()?;
        let tag = self.tag_mut()?;
        let tag_type = tag.tag_type();
        if !picture::supports_pictures(tag_type) {
            warn!(
                "{tag_type:?} tags of {} can't hold pictures",
                self.path.display()
            );
            return Ok(false);
        }

        let removed = picture::clear_pictures(tag);
        debug!("Removed {removed} picture(s) from the {tag_type:?} tag");
        if let Some(cover) = cover {
            tag.push_picture(cover);
        }
        Ok(true)
    }

    /// Writes all tags back to the file they were read from.
    ///
    /// The year of an ID3v2 tag is moved to the frame the chosen ID3v2 revision knows.
    ///
    /// # Errors
    /// This function will error if writing the tags fails in any way.
    pub fn save(&mut self, options: SaveOptions) -> Result<()> {
        if let Some(tag) = self.inner.tag_mut(TagType::Id3v2) {
            convert_id3v2_year(tag, options.id3v2_version);
        }
        let write_options = options.write_options(self.inner.file_type());
        self.inner.save_to_path(&self.path, write_options)?;
        debug!("Saved tags of {}", self.path.display());
        Ok(())
    }

    /// The types of all tags present in the file, primary tag first.
    #[must_use]
    pub fn tag_types(&self) -> Vec<TagType> {
        let primary = self.inner.primary_tag_type();
        let mut types: Vec<TagType> = self.inner.tags().iter().map(Tag::tag_type).collect();
        types.sort_by_key(|t| *t != primary);
        types
    }
}

/// A new tag of `tag_type` holding everything of `from` that the new format can store.
fn seeded_tag(tag_type: TagType, from: &Tag) -> Tag {
    let mut tag = Tag::new(tag_type);
    for item in from.items() {
        let key = match item.key() {
            ItemKey::Year => ItemKey::RecordingDate,
            key => key.clone(),
        };
        tag.push(TagItem::new(key, item.value().clone()));
    }
    for picture in from.pictures() {
        tag.push_picture(picture.clone());
    }
    tag
}

/// ID3v2.3 has no `TDRC` and keeps the year in `TYER`. ID3v2.4 is the other way round.
fn convert_id3v2_year(tag: &mut Tag, version: Id3v2Version) {
    let tyer = id3v23_year_key();
    match version {
        Id3v2Version::V3 => {
            let Some(date) = tag.get_string(&ItemKey::RecordingDate) else {
                return;
            };
            let year: String = date
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            tag.remove_key(&ItemKey::RecordingDate);
            tag.remove_key(&tyer);
            if !year.is_empty() {
                tag.push_unchecked(TagItem::new(tyer, ItemValue::Text(year)));
            }
        }
        Id3v2Version::V4 => {
            let Some(year) = tag.get_string(&tyer).map(str::to_owned) else {
                return;
            };
            tag.remove_key(&tyer);
            if tag.get_string(&ItemKey::RecordingDate).is_none() {
                tag.insert_text(ItemKey::RecordingDate, year);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{TINY_PNG, id3v1_bytes, mp3_bytes, write_fixture};

    pub(crate) fn fixture(dir: &Path, name: &str) -> PathBuf {
        write_fixture(dir, name).unwrap()
    }

    macro_rules! tag_tests {
    ($($name:ident)*) => {
    $(
        mod $name {
            use crate::*;

            fn fresh() -> (tempfile::TempDir, std::path::PathBuf) {
                let dir = tempfile::tempdir().unwrap();
                let path = crate::tests::fixture(dir.path(), concat!("empty.", stringify!($name)));
                (dir, path)
            }

            #[test]
            fn test_set_text_fields() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_text(TextField::Artist, "Some Artist").unwrap();
                file.set_text(TextField::Title, "Some Title").unwrap();
                file.set_year(1999).unwrap();
                file.set_track(7).unwrap();
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let file = TagFile::read_from_path(&path).unwrap();
                let desc = file.describe();
                assert_eq!(desc.artist, "Some Artist");
                assert_eq!(desc.title, "Some Title");
                assert_eq!(desc.year, 1999);
                assert_eq!(desc.track, 7);
            }

            #[test]
            fn test_year_with_id3v24() {
                let (_dir, path) = fresh();
                let v4 = SaveOptions {
                    id3v2_version: Id3v2Version::V4,
                };

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_year(2001).unwrap();
                file.save(v4).unwrap();
                assert_eq!(TagFile::read_from_path(&path).unwrap().describe().year, 2001);

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_text(TextField::Title, "Resaved").unwrap();
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let desc = TagFile::read_from_path(&path).unwrap().describe();
                assert_eq!(desc.year, 2001);
                assert_eq!(desc.title, "Resaved");
            }

            #[test]
            fn test_clear_text_fields() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_text(TextField::Album, "To Be Removed").unwrap();
                file.set_text(TextField::Genre, "Ambient").unwrap();
                file.set_year(2001).unwrap();
                file.save(SaveOptions::default()).unwrap();

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_text(TextField::Album, "").unwrap();
                file.set_year(0).unwrap();
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let desc = TagFile::read_from_path(&path).unwrap().describe();
                assert_eq!(desc.album, "");
                assert_eq!(desc.year, 0);
                assert_eq!(desc.genre, "Ambient");
            }

            #[test]
            fn test_set_property() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                let outcome = file.set_property(&Property::AlbumArtist, "Various Artists").unwrap();
                assert_eq!(outcome, PropertyOutcome::Stored);
                file.set_property(&Property::Composer, "Someone Else").unwrap();
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let desc = TagFile::read_from_path(&path).unwrap().describe();
                assert!(desc.properties.contains(&PropertyEntry {
                    key: "ALBUMARTIST".to_string(),
                    value: "Various Artists".to_string(),
                }));
                assert!(desc.properties.contains(&PropertyEntry {
                    key: "COMPOSER".to_string(),
                    value: "Someone Else".to_string(),
                }));
            }

            #[test]
            fn test_set_custom_property() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                let track_id = Property::Custom("QBZ:TID".to_string());
                assert_eq!(file.set_property(&track_id, "98765").unwrap(), PropertyOutcome::Stored);
                file.save(SaveOptions::default()).unwrap();

                let mut file = TagFile::read_from_path(&path).unwrap();
                assert_eq!(file.set_property(&track_id, "12345").unwrap(), PropertyOutcome::Stored);
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let desc = TagFile::read_from_path(&path).unwrap().describe();
                let values: Vec<&str> = desc
                    .properties
                    .iter()
                    .filter(|p| p.key == "QBZ:TID")
                    .map(|p| p.value.as_str())
                    .collect();
                assert_eq!(values, ["12345"]);
            }

            #[test]
            fn test_remove_property() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                file.set_property(&Property::Isrc, "USRC17607839").unwrap();
                file.set_property(&Property::DiscNumber, "2").unwrap();
                file.save(SaveOptions::default()).unwrap();

                let mut file = TagFile::read_from_path(&path).unwrap();
                assert_eq!(file.set_property(&Property::Isrc, "").unwrap(), PropertyOutcome::Removed);
                assert_eq!(file.set_property(&Property::DiscNumber, "0").unwrap(), PropertyOutcome::Removed);
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let desc = TagFile::read_from_path(&path).unwrap().describe();
                assert!(!desc.properties.iter().any(|p| p.key == "ISRC"));
                assert!(!desc.properties.iter().any(|p| p.key == "DISCNUMBER"));
            }

            #[test]
            fn test_front_cover_replaces_pictures() {
                let (_dir, path) = fresh();

                let mut file = TagFile::read_from_path(&path).unwrap();
                assert!(file.set_front_cover(Some(crate::fixtures::TINY_PNG)).unwrap());
                assert!(file.set_front_cover(Some(crate::fixtures::TINY_PNG)).unwrap());
                file.save(SaveOptions::default()).unwrap();

                let file = TagFile::read_from_path(&path).unwrap();
                let pictures = file.tag().unwrap().pictures();
                assert_eq!(pictures.len(), 1);
                assert_eq!(pictures[0].data(), crate::fixtures::TINY_PNG);

                let mut file = file;
                file.set_front_cover(None).unwrap();
                file.save(SaveOptions::default()).unwrap();

                // Assert
                let file = TagFile::read_from_path(&path).unwrap();
                assert_eq!(file.tag().map_or(0, |t| t.pictures().len()), 0);
            }
        }
    )*
    }
    }

    tag_tests!(wav aiff flac mp3);

    #[test]
    fn numeric_properties_reject_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "numbers.wav");

        let mut file = TagFile::read_from_path(&path).unwrap();
        let res = file.set_property(&Property::TrackTotal, "twelve");
        assert!(matches!(res, Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn property_values_are_stored_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "spaces.flac");

        let mut file = TagFile::read_from_path(&path).unwrap();
        let outcome = file.set_property(&Property::Subtitle, "  ").unwrap();
        assert_eq!(outcome, PropertyOutcome::Stored);
        file.set_property(&Property::Composer, " padded ").unwrap();

        // Assert
        let tag = file.tag().unwrap();
        assert_eq!(tag.get_string(&ItemKey::TrackSubtitle), Some("  "));
        assert_eq!(tag.get_string(&ItemKey::Composer), Some(" padded "));
    }

    #[test]
    fn unknown_content_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"just some text, no audio here").unwrap();

        let res = TagFile::read_from_path(&path);
        assert!(matches!(res, Err(Error::UnsupportedAudioFormat)));
    }

    #[test]
    fn invalid_cover_leaves_tag_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "cover.wav");

        let mut file = TagFile::read_from_path(&path).unwrap();
        file.set_front_cover(Some(TINY_PNG)).unwrap();
        let res = file.set_front_cover(Some(b"plain text, not a picture".as_slice()));
        assert!(matches!(res, Err(Error::InvalidPicture)));
        assert_eq!(file.tag().unwrap().pictures().len(), 1);
    }

    #[test]
    fn id3v2_version_only_applies_to_id3_containers() {
        let v3 = SaveOptions::default();
        let v4 = SaveOptions {
            id3v2_version: Id3v2Version::V4,
        };
        assert_ne!(v3.write_options(FileType::Mpeg), v4.write_options(FileType::Mpeg));
        assert_ne!(v3.write_options(FileType::Wav), v4.write_options(FileType::Wav));
        assert_ne!(v3.write_options(FileType::Aiff), v4.write_options(FileType::Aiff));
        assert_eq!(v3.write_options(FileType::Flac), WriteOptions::new());
        assert_eq!(v4.write_options(FileType::Flac), WriteOptions::new());
    }

    #[test]
    fn id3v2_revision_reaches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "revision.mp3");

        let mut file = TagFile::read_from_path(&path).unwrap();
        file.set_year(1999).unwrap();
        file.save(SaveOptions::default()).unwrap();
        assert!(std::fs::read(&path).unwrap().starts_with(b"ID3\x03"));

        let mut file = TagFile::read_from_path(&path).unwrap();
        file.set_text(TextField::Title, "Upgraded").unwrap();
        file.save(SaveOptions {
            id3v2_version: Id3v2Version::V4,
        })
        .unwrap();

        // Assert
        assert!(std::fs::read(&path).unwrap().starts_with(b"ID3\x04"));
        let desc = TagFile::read_from_path(&path).unwrap().describe();
        assert_eq!(desc.year, 1999);
        assert_eq!(desc.title, "Upgraded");
    }

    #[test]
    fn id3v1_fields_survive_the_first_edit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.mp3");
        let mut data = mp3_bytes();
        data.extend(id3v1_bytes("Old Title", "Old Artist"));
        std::fs::write(&path, data).unwrap();

        let mut file = TagFile::read_from_path(&path).unwrap();
        assert_eq!(file.describe().artist, "Old Artist");
        file.set_text(TextField::Genre, "Rock").unwrap();
        file.set_text(TextField::Title, "New Title").unwrap();
        file.save(SaveOptions::default()).unwrap();

        // Assert
        let file = TagFile::read_from_path(&path).unwrap();
        assert_eq!(file.tag_types(), [TagType::Id3v2, TagType::Id3v1]);
        let desc = file.describe();
        assert_eq!(desc.artist, "Old Artist");
        assert_eq!(desc.title, "New Title");
        assert_eq!(desc.genre, "Rock");
        assert_eq!(desc.year, 1987);

        let id3v1 = file.inner.tag(TagType::Id3v1).unwrap();
        assert_eq!(id3v1.title().as_deref(), Some("New Title"));
        assert_eq!(id3v1.artist().as_deref(), Some("Old Artist"));
    }

    #[test]
    fn supported_paths_by_extension() {
        assert!(is_supported_path(Path::new("a/b/song.MP3")));
        assert!(is_supported_path(Path::new("song.flac")));
        assert!(is_supported_path(Path::new("song.m4a")));
        assert!(!is_supported_path(Path::new("cover.jpg")));
        assert!(!is_supported_path(Path::new("README")));
    }

    #[test]
    fn wav_audio_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = fixture(dir.path(), "props.wav");

        let audio = TagFile::read_from_path(&path).unwrap().describe().audio;
        assert_eq!(audio.sample_rate, 44_100);
        assert_eq!(audio.channels, 2);
        assert_eq!(audio.duration.as_secs(), 2);
        assert_eq!(audio.bitrate, 1411);
    }
}
