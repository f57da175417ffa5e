/// Configuration shared by the Vellum crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Filter directive handed to the log subscriber, e.g. `"info"` or
    /// `"vellum_ui=trace"`. `RUST_LOG` takes precedence when set.
    pub log_filter: String,
}

impl Config {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: String::from("info"),
        }
    }
}
