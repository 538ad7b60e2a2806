use std::path::Path;
use crate::models::{IconConfig, IconKind, IconTarget, Rgb};

pub const OUT_DIR: &str = "teams-package";

/// `#0078D4`
pub const BRAND_BLUE: Rgb = [0x00, 0x78, 0xD4];
pub const WHITE: Rgb = [0xFF, 0xFF, 0xFF];

pub const COLOR_SIZE: u32 = 192;
pub const OUTLINE_SIZE: u32 = 32;

impl Default for IconConfig {
    fn default() -> Self {
        Self::with_out_dir(OUT_DIR)
    }
}

impl IconConfig {
    /// Same icon set written into `dir`. The directory is never created here.
    pub fn with_out_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let target = |kind: IconKind, size: u32, fill: Rgb| IconTarget {
            kind,
            width: size,
            height: size,
            fill,
            path: dir.join(kind.file_name()),
        };
        Self {
            color: target(IconKind::Color, COLOR_SIZE, BRAND_BLUE),
            outline: target(IconKind::Outline, OUTLINE_SIZE, WHITE),
        }
    }
}
