use serde::{Deserialize, Serialize};

/// The logger configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// A string which is used to build [env_logger::Filter] for the main logger.
    ///
    /// `RUST_LOG` takes precedence over it when set.
    ///
    /// [env_logger::Filter]: https://docs.rs/env_logger/*/env_logger/filter/struct.Filter.html
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Colorize the output which was written into the stderr.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_filter() -> String {
    "info".to_owned()
}

const fn default_color() -> bool {
    !cfg!(windows)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filter: default_filter(),
            color: default_color(),
        }
    }
}
