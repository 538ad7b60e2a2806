use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageBuffer, ImageEncoder, Pixel, Rgb, RgbImage, Rgba, RgbaImage};

use crate::config::WHITE;
use crate::error::IconError;
use crate::models::{IconKind, IconTarget};

/// Ellipse given by its bounding box, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Ellipse {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// True when the center of pixel (x, y) lies inside the ellipse.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.contains_inset(x, y, 0.0)
    }

    fn contains_inset(&self, x: u32, y: u32, inset: f32) -> bool {
        let cx = (self.x0 + self.x1 + 1) as f32 * 0.5;
        let cy = (self.y0 + self.y1 + 1) as f32 * 0.5;
        let rx = (self.x1 - self.x0 + 1) as f32 * 0.5 - inset;
        let ry = (self.y1 - self.y0 + 1) as f32 * 0.5 - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (x as f32 + 0.5 - cx) / rx;
        let dy = (y as f32 + 0.5 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

pub type Triangle = [(f32, f32); 3];

// Color icon (192x192)
pub const PIN_HEAD: Ellipse = Ellipse::new(76, 56, 116, 96);
pub const PIN_HOLE: Ellipse = Ellipse::new(86, 66, 106, 86);
pub const PIN_POINT: Triangle = [(96.0, 96.0), (86.0, 116.0), (106.0, 116.0)];

// Outline icon (32x32)
pub const RING: Ellipse = Ellipse::new(12, 8, 20, 16);
pub const RING_WIDTH: u32 = 2;
pub const RING_POINT: Triangle = [(16.0, 16.0), (14.0, 20.0), (18.0, 20.0)];

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

/// Edges count as inside.
fn point_in_triangle(px: f32, py: f32, t: &Triangle) -> bool {
    let [(x1, y1), (x2, y2), (x3, y3)] = *t;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

fn last(n: u32) -> u32 { n.saturating_sub(1) }

fn fill_ellipse<P: Pixel>(img: &mut ImageBuffer<P, Vec<P::Subpixel>>, e: Ellipse, color: P) {
    for y in e.y0..=e.y1.min(last(img.height())) {
        for x in e.x0..=e.x1.min(last(img.width())) {
            if e.contains(x, y) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn stroke_ellipse<P: Pixel>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    e: Ellipse,
    width: u32,
    color: P,
) {
    for y in e.y0..=e.y1.min(last(img.height())) {
        for x in e.x0..=e.x1.min(last(img.width())) {
            if e.contains(x, y) && !e.contains_inset(x, y, width as f32) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn fill_triangle<P: Pixel>(img: &mut ImageBuffer<P, Vec<P::Subpixel>>, t: &Triangle, color: P) {
    let xs = t.map(|p| p.0);
    let ys = t.map(|p| p.1);
    let min = |v: [f32; 3]| v.into_iter().fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
    let max = |v: [f32; 3]| v.into_iter().fold(f32::NEG_INFINITY, f32::max).ceil().max(0.0) as u32;
    for y in min(ys)..=max(ys).min(last(img.height())) {
        for x in min(xs)..=max(xs).min(last(img.width())) {
            if point_in_triangle(x as f32, y as f32, t) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Opaque pin glyph: white head, background-colored hole, white point.
pub fn render_color_icon(target: &IconTarget) -> RgbImage {
    let bg = Rgb(target.fill);
    let white = Rgb(WHITE);
    let mut img = RgbImage::from_pixel(target.width, target.height, bg);
    fill_ellipse(&mut img, PIN_HEAD, white);
    fill_ellipse(&mut img, PIN_HOLE, bg);
    fill_triangle(&mut img, &PIN_POINT, white);
    img
}

/// Line-art pin on a transparent canvas.
pub fn render_outline_icon(target: &IconTarget) -> RgbaImage {
    let [r, g, b] = target.fill;
    let ink = Rgba([r, g, b, 0xFF]);
    let mut img = RgbaImage::from_pixel(target.width, target.height, TRANSPARENT);
    stroke_ellipse(&mut img, RING, RING_WIDTH, ink);
    fill_triangle(&mut img, &RING_POINT, ink);
    img
}

pub enum RenderedIcon {
    Color(RgbImage),
    Outline(RgbaImage),
}

impl RenderedIcon {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            RenderedIcon::Color(img) => img.dimensions(),
            RenderedIcon::Outline(img) => img.dimensions(),
        }
    }

    fn raw(&self) -> (&[u8], ColorType) {
        match self {
            RenderedIcon::Color(img) => (img.as_raw().as_slice(), ColorType::Rgb8),
            RenderedIcon::Outline(img) => (img.as_raw().as_slice(), ColorType::Rgba8),
        }
    }
}

pub fn render(target: &IconTarget) -> RenderedIcon {
    match target.kind {
        IconKind::Color => RenderedIcon::Color(render_color_icon(target)),
        IconKind::Outline => RenderedIcon::Outline(render_outline_icon(target)),
    }
}

/// Encodes as PNG and replaces `path`. The parent directory must exist.
pub fn save(icon: &RenderedIcon, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let (width, height) = icon.dimensions();
    let (raw, color_type) = icon.raw();
    PngEncoder::new(&mut writer)
        .write_image(raw, width, height, color_type)
        .map_err(|source| IconError::Encode { path: path.to_path_buf(), source })?;
    writer.flush().map_err(|e| IconError::io(path, e))
}
