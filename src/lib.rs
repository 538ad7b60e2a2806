//! Generates the Teams app package icons: a 192×192 color pin and a 32×32
//! transparent outline pin. Builds without the `imaging` feature write
//! placeholder files instead (see [`placeholder`]).

pub mod config;
pub mod error;
#[cfg(feature = "imaging")]
pub mod icon;
pub mod logger;
pub mod models;
pub mod placeholder;
pub mod renderer;

use crate::error::IconError;
use crate::logger::log_line;
use crate::models::IconConfig;
use crate::renderer::{Capability, IconWriter};

/// Probes once, then writes every target with the selected writer.
pub fn run(config: &IconConfig) -> Result<Capability, IconError> {
    let capability = renderer::probe();
    let writer = renderer::select(capability);
    write_all(writer.as_ref(), config)?;
    Ok(capability)
}

/// Writes color then outline. Stops at the first failure; files already
/// written stay in place.
pub fn write_all(writer: &dyn IconWriter, config: &IconConfig) -> Result<(), IconError> {
    for target in config.targets() {
        writer.write(target)?;
    }
    log_line(writer.completion_message());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PlaceholderEmitter;
    use std::fs;

    fn be_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_placeholder_run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path());
        write_all(&PlaceholderEmitter, &cfg).unwrap();

        let color = fs::read(&cfg.color.path).unwrap();
        assert_eq!(&color[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!((be_u32(&color, 16), be_u32(&color, 20)), (192, 192));

        let outline = fs::read(&cfg.outline.path).unwrap();
        assert_eq!(&outline[..8], &placeholder::SIGNATURE);
        assert_eq!((be_u32(&outline, 16), be_u32(&outline, 20)), (32, 32));
    }

    #[test]
    fn test_placeholder_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path());
        write_all(&PlaceholderEmitter, &cfg).unwrap();
        let first = (fs::read(&cfg.color.path).unwrap(), fs::read(&cfg.outline.path).unwrap());
        write_all(&PlaceholderEmitter, &cfg).unwrap();
        let second = (fs::read(&cfg.color.path).unwrap(), fs::read(&cfg.outline.path).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path());
        run(&cfg).unwrap();
        assert!(cfg.color.path.is_file());
        assert!(cfg.outline.path.is_file());
    }

    #[test]
    fn test_run_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path().join("teams-package"));
        assert!(run(&cfg).is_err());
        assert!(!cfg.color.path.exists());
        assert!(!cfg.outline.path.exists());
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn test_imaging_run_decodes() {
        use image::{ColorType, GenericImageView};

        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path());
        assert_eq!(run(&cfg).unwrap(), Capability::Imaging);

        let color = image::open(&cfg.color.path).unwrap();
        assert_eq!(color.dimensions(), (192, 192));
        assert_eq!(color.color(), ColorType::Rgb8);

        let outline = image::open(&cfg.outline.path).unwrap();
        assert_eq!(outline.dimensions(), (32, 32));
        assert_eq!(outline.color(), ColorType::Rgba8);
        let rgba = outline.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0)[3], 0);
        assert!(rgba.pixels().any(|p| p[3] > 0));
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn test_imaging_rerun_is_pixel_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::with_out_dir(dir.path());
        run(&cfg).unwrap();
        let decode = || {
            (
                image::open(&cfg.color.path).unwrap().to_rgb8(),
                image::open(&cfg.outline.path).unwrap().to_rgba8(),
            )
        };
        let (color_first, outline_first) = decode();
        run(&cfg).unwrap();
        let (color_second, outline_second) = decode();
        assert_eq!(color_first, color_second);
        assert_eq!(outline_first, outline_second);
    }
}
