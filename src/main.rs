use std::process::ExitCode;

use teams_icons::logger::log_error;
use teams_icons::models::IconConfig;

fn main() -> ExitCode {
    match teams_icons::run(&IconConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log_error("icon generation failed", &e);
            ExitCode::FAILURE
        }
    }
}
