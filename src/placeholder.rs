//! Placeholder PNG-shaped files for when no imaging support is compiled in.
//!
//! The output carries a PNG signature, an IHDR block with the requested
//! dimensions and an empty IEND block. There is no IDAT and the IHDR
//! integrity field is zero instead of a CRC, so a strict decoder rejects it.
//! Treat these files as stand-ins only.

use std::fs;
use std::path::Path;

use crate::error::IconError;
use crate::logger::log_line;
use crate::models::Rgb;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Written where the IHDR CRC belongs. Intentionally not a checksum.
pub const INTEGRITY_PLACEHOLDER: [u8; 4] = [0, 0, 0, 0];

/// Bit depth 8, truecolor, deflate, adaptive filter, no interlace.
pub const IHDR_FLAGS: [u8; 5] = [0x08, 0x02, 0x00, 0x00, 0x00];

/// Standard IEND CRC.
pub const IEND_TRAILER: [u8; 4] = [0xAE, 0x42, 0x60, 0x82];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Bytes(&'static [u8]),
    U32Be(u32),
    WidthBe,
    HeightBe,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub encoding: Encoding,
}

impl Field {
    const fn new(name: &'static str, encoding: Encoding) -> Self {
        Self { name, encoding }
    }

    pub fn size(&self) -> usize {
        match self.encoding {
            Encoding::Bytes(b) => b.len(),
            Encoding::U32Be(_) | Encoding::WidthBe | Encoding::HeightBe => 4,
        }
    }

    fn encode_into(&self, out: &mut Vec<u8>, width: u32, height: u32) {
        match self.encoding {
            Encoding::Bytes(b) => out.extend_from_slice(b),
            Encoding::U32Be(v) => out.extend_from_slice(&v.to_be_bytes()),
            Encoding::WidthBe => out.extend_from_slice(&width.to_be_bytes()),
            Encoding::HeightBe => out.extend_from_slice(&height.to_be_bytes()),
        }
    }
}

/// Ordered on-disk layout, first byte to last.
pub const LAYOUT: &[Field] = &[
    Field::new("signature", Encoding::Bytes(&SIGNATURE)),
    Field::new("ihdr_length", Encoding::U32Be(13)),
    Field::new("ihdr_type", Encoding::Bytes(b"IHDR")),
    Field::new("width", Encoding::WidthBe),
    Field::new("height", Encoding::HeightBe),
    Field::new("ihdr_flags", Encoding::Bytes(&IHDR_FLAGS)),
    Field::new("ihdr_integrity", Encoding::Bytes(&INTEGRITY_PLACEHOLDER)),
    Field::new("iend_length", Encoding::U32Be(0)),
    Field::new("iend_type", Encoding::Bytes(b"IEND")),
    Field::new("iend_trailer", Encoding::Bytes(&IEND_TRAILER)),
];

/// Total size of one placeholder file.
pub fn encoded_len() -> usize {
    LAYOUT.iter().map(Field::size).sum()
}

/// Byte offset of a named field within the layout.
pub fn offset_of(name: &str) -> Option<usize> {
    let mut offset = 0;
    for field in LAYOUT {
        if field.name == name {
            return Some(offset);
        }
        offset += field.size();
    }
    None
}

pub fn encode(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len());
    for field in LAYOUT {
        field.encode_into(&mut out, width, height);
    }
    out
}

fn describe(width: u32, height: u32, color: Rgb, path: &Path) -> String {
    let [r, g, b] = color;
    format!(
        "Placeholder {}x{} ({}, {}, {}) written: {}",
        width,
        height,
        r,
        g,
        b,
        path.display()
    )
}

/// Writes a placeholder for a `width`×`height` icon to `path`, replacing any
/// existing file. `color` is only logged: nothing is drawn, so it never
/// reaches the file.
pub fn emit_placeholder(
    width: u32,
    height: u32,
    color: Rgb,
    path: &Path,
) -> Result<(), IconError> {
    fs::write(path, encode(width, height)).map_err(|e| IconError::io(path, e))?;
    log_line(&describe(width, height, color, path));
    Ok(())
}
