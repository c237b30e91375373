use lofty::picture::{Picture, PictureType};
use lofty::tag::{Tag, TagType};

use crate::{Error, Result};

/// Whether a tag format has room for embedded pictures.
///
/// ID3v2 stores them in `APIC` frames, MP4 in `covr` atoms, APE in `Cover Art (...)` items and
/// Vorbis comments either as FLAC `PICTURE` blocks or `METADATA_BLOCK_PICTURE` fields in Ogg.
pub(crate) fn supports_pictures(tag_type: TagType) -> bool {
    matches!(
        tag_type,
        TagType::Id3v2 | TagType::Mp4Ilst | TagType::VorbisComments | TagType::Ape
    )
}

/// Removes every picture from the tag and returns how many were removed.
pub(crate) fn clear_pictures(tag: &mut Tag) -> usize {
    let types: Vec<PictureType> = tag.pictures().iter().map(Picture::pic_type).collect();
    for pic_type in &types {
        tag.remove_picture_type(*pic_type);
    }
    types.len()
}

/// Description stored with the front cover.
pub(crate) const FRONT_COVER_DESCRIPTION: &str = "Front Cover";

/// Builds a front cover from raw image bytes. The mime type is sniffed from the data.
///
/// The picture always carries a description. An empty one is written as a UTF-16 string
/// without byte order mark in ID3v2.3 `APIC` frames, which makes the tag unreadable.
pub(crate) fn front_cover(data: &[u8]) -> Result<Picture> {
    let mut reader = data;
    let mut picture = Picture::from_reader(&mut reader).map_err(|_| Error::InvalidPicture)?;
    picture.set_pic_type(PictureType::CoverFront);
    picture.set_description(Some(FRONT_COVER_DESCRIPTION.to_owned()));
    Ok(picture)
}
