use std::fmt::Write;

use multitag::{FileDescription, PropertyEntry};

/// Renders a description in the plain text info layout.
pub fn render_text(desc: &FileDescription) -> String {
    let mut out = String::new();
    // Writing to a String can't fail.
    let _ = write_text(&mut out, desc);
    out
}

fn write_text(out: &mut String, desc: &FileDescription) -> std::fmt::Result {
    writeln!(out, "{}", desc.file_type)?;
    writeln!(out, "Information for file {}", desc.path)?;
    writeln!(out, " Artist: {}", desc.artist)?;
    writeln!(out, "  Title: {}", desc.title)?;
    writeln!(out, "  Album: {}", desc.album)?;
    writeln!(out, "   Year: {}", desc.year)?;
    writeln!(out, "  Track: {}", desc.track)?;
    writeln!(out, "  Genre: {}", desc.genre)?;
    writeln!(out, "Comment: {}", desc.comment)?;

    writeln!(out, "-- TAG (properties) --")?;
    write_properties(out, &desc.properties)?;

    writeln!(out, "-- TAG (format specific names) --")?;
    for tag in &desc.tags {
        writeln!(out, "{}", tag.tag_type)?;
        for (key, values) in &tag.items {
            writeln!(out, "{key}")?;
            for value in values {
                writeln!(out, "   {value}")?;
            }
        }
        writeln!(out, "Num pictures: {}", tag.pictures)?;
    }

    let secs = desc.audio.duration.as_secs();
    writeln!(out, "-- AUDIO --")?;
    writeln!(out, "bitrate     - {}", desc.audio.bitrate)?;
    writeln!(out, "sample rate - {}", desc.audio.sample_rate)?;
    writeln!(out, "channels    - {}", desc.audio.channels)?;
    writeln!(out, "length      - {}:{:02}", secs / 60, secs % 60)
}

/// Lists the properties a tag format refused, after a write.
pub fn render_rejected(rejected: &[PropertyEntry]) -> String {
    let mut out = String::from("-- rejected TAGs (properties) --\n");
    let _ = write_properties(&mut out, rejected);
    out
}

fn write_properties(out: &mut String, entries: &[PropertyEntry]) -> std::fmt::Result {
    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for entry in entries {
        writeln!(out, "{:<width$} - \"{}\"", entry.key, entry.value)?;
    }
    Ok(())
}

pub fn render_json(descriptions: &[FileDescription]) -> serde_json::Result<String> {
    match descriptions {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}
