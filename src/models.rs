use std::path::PathBuf;

/// 8-bit RGB triple.
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Color,
    Outline,
}

impl IconKind {
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::Color => "Color",
            IconKind::Outline => "Outline",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            IconKind::Color => "color.png",
            IconKind::Outline => "outline.png",
        }
    }
}

/// One output asset: what to draw, how big, and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub kind: IconKind,
    pub width: u32,
    pub height: u32,
    /// Background for `Color`, ink for `Outline`.
    pub fill: Rgb,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub color: IconTarget,
    pub outline: IconTarget,
}

impl IconConfig {
    /// Targets in write order: color first, then outline.
    pub fn targets(&self) -> [&IconTarget; 2] {
        [&self.color, &self.outline]
    }
}
