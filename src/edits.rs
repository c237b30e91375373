use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use clap::builder::{OsStringValueParser, TypedValueParser};
use log::{debug, info};
use multitag::{Property, PropertyEntry, PropertyOutcome, TagFile, TextField};
use serde::{Deserialize, Serialize};

/// Tag values to write. `None` leaves the value in the file untouched.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagEdits {
    /// Artist/Performer
    #[arg(short = 'a', long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Title/Song name/Content
    #[arg(short = 't', long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Album/Movie/Show title
    #[arg(short = 'A', long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Year
    #[arg(short = 'y', long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Track number/Position
    #[arg(short = 'T', long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
    /// Genre
    #[arg(short = 'g', long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Description/Comment
    #[arg(short = 'c', long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Work/Subtitle (SUBTITLE)
    #[arg(long, visible_alias = "subtitle", value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    /// Album artist (ALBUMARTIST)
    #[arg(long = "albumArtist", visible_alias = "performer", value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    /// Composer (COMPOSER)
    #[arg(long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<String>,
    /// Copyright (COPYRIGHT)
    #[arg(long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// License/File owner (OWNER)
    #[arg(long, visible_alias = "owner", value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Encoded by (ENCODEDBY)
    #[arg(long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encodedby: Option<String>,
    /// International Standard Recording Code (ISRC)
    #[arg(long, value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    /// Store track id (QBZ:TID)
    #[arg(long = "trackId", value_name = "TEXT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    /// Disc number (DISCNUMBER)
    #[arg(long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discnumber: Option<u32>,
    /// Total number of discs (DISCTOTAL)
    #[arg(long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disctotal: Option<u32>,
    /// Track number (TRACKNUMBER)
    #[arg(long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracknumber: Option<u32>,
    /// Total number of tracks (TRACKTOTAL)
    #[arg(long, value_name = "INT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracktotal: Option<u32>,
    /// Front cover image. An empty path removes all pictures
    #[arg(
        short = 'p',
        long,
        value_name = "FILE",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<PathBuf>,
}

/// What [`TagEdits::apply`] did to a file.
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    /// At least one value was written, so the file needs saving.
    pub processed: bool,
    /// Properties the tag format had no place for.
    pub rejected: Vec<PropertyEntry>,
    /// A picture was given but the tag format can't hold one.
    pub picture_dropped: bool,
}

impl TagEdits {
    /// Values set here win, anything missing is taken from `base`.
    #[must_use]
    pub fn merge_over(self, base: Self) -> Self {
        Self {
            artist: self.artist.or(base.artist),
            title: self.title.or(base.title),
            album: self.album.or(base.album),
            year: self.year.or(base.year),
            track: self.track.or(base.track),
            genre: self.genre.or(base.genre),
            comment: self.comment.or(base.comment),
            work: self.work.or(base.work),
            album_artist: self.album_artist.or(base.album_artist),
            composer: self.composer.or(base.composer),
            copyright: self.copyright.or(base.copyright),
            license: self.license.or(base.license),
            encodedby: self.encodedby.or(base.encodedby),
            isrc: self.isrc.or(base.isrc),
            track_id: self.track_id.or(base.track_id),
            discnumber: self.discnumber.or(base.discnumber),
            disctotal: self.disctotal.or(base.disctotal),
            tracknumber: self.tracknumber.or(base.tracknumber),
            tracktotal: self.tracktotal.or(base.tracktotal),
            picture: self.picture.or(base.picture),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn text_fields(&self) -> [(TextField, Option<&String>); 5] {
        [
            (TextField::Artist, self.artist.as_ref()),
            (TextField::Title, self.title.as_ref()),
            (TextField::Album, self.album.as_ref()),
            (TextField::Genre, self.genre.as_ref()),
            (TextField::Comment, self.comment.as_ref()),
        ]
    }

    /// The extended properties in write order, with numbers already formatted.
    fn properties(&self) -> Vec<(Property, String)> {
        let text = |p: Property, v: &Option<String>| v.clone().map(|v| (p, v));
        let number = |p: Property, v: Option<u32>| v.map(|v| (p, v.to_string()));

        [
            text(Property::Subtitle, &self.work),
            text(Property::AlbumArtist, &self.album_artist),
            number(Property::DiscNumber, self.discnumber),
            number(Property::DiscTotal, self.disctotal),
            number(Property::TrackNumber, self.tracknumber),
            number(Property::TrackTotal, self.tracktotal),
            text(Property::Composer, &self.composer),
            text(Property::Copyright, &self.copyright),
            text(Property::Owner, &self.license),
            text(Property::EncodedBy, &self.encodedby),
            text(Property::Isrc, &self.isrc),
            text(Property::Custom("QBZ:TID".to_string()), &self.track_id),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Forwards every present value to the file. Nothing is saved here.
    pub fn apply(&self, file: &mut TagFile) -> anyhow::Result<ApplyOutcome> {
        let mut outcome = ApplyOutcome::default();

        let [artist, title, album, genre, comment] = self.text_fields();
        for (field, value) in [artist, title, album] {
            if let Some(value) = value {
                debug!("{}: {value:?}", field.label());
                file.set_text(field, value)?;
                outcome.processed = true;
            }
        }
        if let Some(year) = self.year {
            file.set_year(year)?;
            outcome.processed = true;
        }
        if let Some(track) = self.track {
            file.set_track(track)?;
            outcome.processed = true;
        }
        for (field, value) in [genre, comment] {
            if let Some(value) = value {
                debug!("{}: {value:?}", field.label());
                file.set_text(field, value)?;
                outcome.processed = true;
            }
        }

        for (property, value) in self.properties() {
            outcome.processed = true;
            let result = file
                .set_property(&property, &value)
                .with_context(|| format!("When setting {property}"))?;
            if result == PropertyOutcome::Rejected {
                outcome.rejected.push(PropertyEntry {
                    key: property.name().to_owned(),
                    value,
                });
            }
        }

        if let Some(picture) = &self.picture {
            outcome.processed = true;
            let stored = if picture.as_os_str().is_empty() {
                info!("Removing pictures from {}", file.path().display());
                file.set_front_cover(None)?
            } else {
                let data = std::fs::read(picture)
                    .with_context(|| format!("When reading picture {}", picture.display()))?;
                file.set_front_cover(Some(&data))
                    .with_context(|| format!("When embedding {}", picture.display()))?
            };
            outcome.picture_dropped = !stored;
        }

        Ok(outcome)
    }
}
