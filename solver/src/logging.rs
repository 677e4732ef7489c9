use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

pub struct Logger;

/// colog's level prefix with a local wall-clock timestamp in front.
struct Timestamped;

impl CologStyle for Timestamped {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}{}{}",
            chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold()
        )
    }
}

impl Logger {
    /// `RUST_LOG`, when set, overrides the CLI verbosity.
    pub fn init(verbosity: LevelFilter) {
        let mut builder: env_logger::Builder = colog::basic_builder();
        builder.format(colog::formatter(Timestamped));
        builder.filter_level(verbosity);
        builder.parse_default_env();
        builder.init();
    }
}
