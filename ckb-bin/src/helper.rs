use ckb_unique_app_config::LogConfig;
use env_logger::{Builder, Env, WriteStyle};

/// Logs to stderr, keeping stdout for the command output.
///
/// `RUST_LOG` overrides the filter of the config file.
pub(crate) fn init_logger(config: &LogConfig) {
    let env = Env::default().default_filter_or(config.filter.as_str());
    let write_style = if config.color {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    };
    // a logger may already be installed when embedded
    let _ = Builder::from_env(env)
        .write_style(write_style)
        .format_timestamp_millis()
        .try_init();
}
