//! Logger setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Default log4rs config file, looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Config used when the log4rs file is missing or broken: warnings and
/// errors to stderr only.
pub fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Initialise log4rs from `path`, falling back to [`fallback_config`].
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = log4rs::init_file(path, Default::default()) {
        log4rs::init_config(fallback_config()?)?;
        log::warn!("{path} not loaded, logging warnings to stderr: {e}");
    }
    Ok(())
}
