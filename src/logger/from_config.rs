//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::fmt::LineFormat;
use crate::output::FileOutput;

impl Logger {
    /// Applies the threshold and enables the outputs the config asks for.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = LoggerBuilder::new().level(config.parse_level());

        if config.terminal.enabled {
            builder = builder
                .terminal()
                .stream(config.parse_stream())
                .colors(config.terminal.colors)
                .timestamp(config.terminal.timestamp)
                .file_info(config.terminal.file_info)
                .done();
        }

        if config.file.enabled {
            let format = LineFormat::plain()
                .timestamp(config.file.timestamp)
                .file_info(config.file.file_info);
            builder = builder.output(FileOutput::new(&config.file.path).format(format));
        }

        builder.build()
    }
}
