use crate::error::IconError;
use crate::logger::{log_line, log_notice};
use crate::models::IconTarget;
use crate::placeholder::emit_placeholder;

/// Whether real drawing and PNG encoding are available in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Imaging,
    Unavailable,
}

/// One way of turning an [`IconTarget`] into a file.
pub trait IconWriter {
    fn write(&self, target: &IconTarget) -> Result<(), IconError>;

    /// Printed once after every target has been written.
    fn completion_message(&self) -> &'static str;
}

/// One-shot check, run at startup only.
pub fn probe() -> Capability {
    if cfg!(feature = "imaging") {
        Capability::Imaging
    } else {
        log_notice("Imaging support not available, creating simple files");
        Capability::Unavailable
    }
}

pub fn select(capability: Capability) -> Box<dyn IconWriter> {
    match capability {
        #[cfg(feature = "imaging")]
        Capability::Imaging => Box::new(ImageRenderer),
        _ => Box::new(PlaceholderEmitter),
    }
}

#[cfg(feature = "imaging")]
pub struct ImageRenderer;

#[cfg(feature = "imaging")]
impl IconWriter for ImageRenderer {
    fn write(&self, target: &IconTarget) -> Result<(), IconError> {
        let icon = crate::icon::render(target);
        crate::icon::save(&icon, &target.path)?;
        log_line(&format!("{} icon saved: {}", target.kind.label(), target.path.display()));
        Ok(())
    }

    fn completion_message(&self) -> &'static str {
        "Icons created successfully!"
    }
}

pub struct PlaceholderEmitter;

impl IconWriter for PlaceholderEmitter {
    fn write(&self, target: &IconTarget) -> Result<(), IconError> {
        emit_placeholder(target.width, target.height, target.fill, &target.path)
    }

    fn completion_message(&self) -> &'static str {
        "Simple PNG files created"
    }
}
