#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod settings;

use agent_field::{AmbientField, RasterCanvas};
use log::warn;
use pixels_main_support::animate;
use settings::Settings;
use std::env;
use std::path::PathBuf;

const SETTINGS_ENV_VAR: &str = "AMBIENT_FIELD_CONFIG";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = Settings::load(settings_path().as_deref())?;
    if let Err(problem) = settings.field.validate() {
        warn!("Field configuration looks off: {problem}");
    }

    animate(settings.frame_interval(), |window| {
        AmbientField::new(
            RasterCanvas::new(),
            settings.field.clone(),
            window,
            settings.random(),
        )
    })?;
    Ok(())
}

fn settings_path() -> Option<PathBuf> {
    env::args_os()
        .nth(1)
        .or_else(|| env::var_os(SETTINGS_ENV_VAR))
        .map(PathBuf::from)
}
