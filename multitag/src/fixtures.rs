//! Minimal audio files for tests: valid headers and silence, no tags.

use std::io;
use std::path::{Path, PathBuf};

const SAMPLE_RATE: u32 = 44_100;

/// A 1x1 RGB PNG, only the parts a decoder needs to read the header.
pub const TINY_PNG: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R', // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
    0x08, 0x02, 0x00, 0x00, 0x00, // depth 8, RGB
    0x90, 0x77, 0x53, 0xDE, // crc
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];

/// Two seconds of 16 bit stereo silence at 44.1 kHz.
#[must_use]
pub fn wav_bytes() -> Vec<u8> {
    let byte_rate = SAMPLE_RATE * 4;
    let data_len = byte_rate * 2;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&2u16.to_le_bytes()); // channels
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&4u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(out.len() + data_len as usize, 0);
    out
}

/// The same two seconds as [`wav_bytes`], as big endian AIFF.
#[must_use]
pub fn aiff_bytes() -> Vec<u8> {
    let frames = SAMPLE_RATE * 2;
    let data_len = frames * 4;

    let mut out = Vec::new();
    out.extend_from_slice(b"FORM");
    out.extend_from_slice(&(4 + 26 + 16 + data_len).to_be_bytes());
    out.extend_from_slice(b"AIFF");
    out.extend_from_slice(b"COMM");
    out.extend_from_slice(&18u32.to_be_bytes());
    out.extend_from_slice(&2u16.to_be_bytes()); // channels
    out.extend_from_slice(&frames.to_be_bytes());
    out.extend_from_slice(&16u16.to_be_bytes()); // bits per sample
    // 44100 as 80 bit extended float
    out.extend_from_slice(&[0x40, 0x0E, 0xAC, 0x44, 0, 0, 0, 0, 0, 0]);
    out.extend_from_slice(b"SSND");
    out.extend_from_slice(&(8 + data_len).to_be_bytes());
    out.extend_from_slice(&0u32.to_be_bytes()); // offset
    out.extend_from_slice(&0u32.to_be_bytes()); // block size
    out.resize(out.len() + data_len as usize, 0);
    out
}

/// A FLAC stream with STREAMINFO and a PADDING block, followed by filler bytes.
#[must_use]
pub fn flac_bytes() -> Vec<u8> {
    let total_samples: u64 = 88_200;

    let mut out = Vec::new();
    out.extend_from_slice(b"fLaC");
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x22]); // STREAMINFO, 34 bytes
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&4096u16.to_be_bytes());
    out.extend_from_slice(&[0x00, 0x00, 0x0E]); // min frame size
    out.extend_from_slice(&[0x00, 0x10, 0x00]); // max frame size
    let packed = (u64::from(SAMPLE_RATE) << 44) | (1 << 41) | (15 << 36) | total_samples;
    out.extend_from_slice(&packed.to_be_bytes());
    out.extend_from_slice(&[0u8; 16]); // md5
    out.extend_from_slice(&[0x81, 0x00, 0x04, 0x00]); // last block, PADDING, 1024 bytes
    out.resize(out.len() + 1024, 0);
    out.resize(out.len() + 4096, 0);
    out
}

/// About a second of MPEG-1 Layer III frames at 128 kbit/s, 44.1 kHz stereo.
#[must_use]
pub fn mp3_bytes() -> Vec<u8> {
    const FRAME_LEN: usize = 417;

    let mut out = Vec::with_capacity(FRAME_LEN * 40);
    for _ in 0..40 {
        let start = out.len();
        out.extend_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        out.resize(start + FRAME_LEN, 0);
    }
    out
}

/// A 128 byte ID3v1 tag with the given title and artist and the year 1987.
#[must_use]
pub fn id3v1_bytes(title: &str, artist: &str) -> Vec<u8> {
    fn field(out: &mut Vec<u8>, value: &str, len: usize) {
        let start = out.len();
        out.extend(value.bytes().take(len));
        out.resize(start + len, 0);
    }

    let mut out = Vec::with_capacity(128);
    out.extend_from_slice(b"TAG");
    field(&mut out, title, 30);
    field(&mut out, artist, 30);
    field(&mut out, "", 30); // album
    out.extend_from_slice(b"1987");
    field(&mut out, "", 30); // comment
    out.push(0xFF); // no genre
    out
}

/// Writes a fixture named `name` into `dir`, picking the format by extension.
///
/// # Errors
/// This function will error for extensions without a fixture, or if writing fails.
pub fn write_fixture(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    let data = match path.extension().and_then(|e| e.to_str()) {
        Some("wav") => wav_bytes(),
        Some("aiff") => aiff_bytes(),
        Some("flac") => flac_bytes(),
        Some("mp3") => mp3_bytes(),
        other => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no fixture for extension {other:?}"),
            ));
        }
    };
    std::fs::write(&path, data)?;
    Ok(path)
}
