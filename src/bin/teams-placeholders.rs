use std::process::ExitCode;

use teams_icons::logger::log_error;
use teams_icons::models::IconConfig;
use teams_icons::renderer::PlaceholderEmitter;

// Always takes the fallback path, even in builds with imaging support.
fn main() -> ExitCode {
    match teams_icons::write_all(&PlaceholderEmitter, &IconConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error("placeholder generation failed", &e);
            ExitCode::FAILURE
        }
    }
}
