use crate::ConfigError;

/// Exit codes of the `ckb-unique` process.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitCode {
    /// Command line arguments error.
    Cli = 64,
    /// Config options error.
    Config = 65,
    /// Input/output error.
    IO = 66,
    /// General failure.
    Failure = 113,
}

impl ExitCode {
    /// Converts into signed 32-bit integer which can be used as the process exit status.
    pub fn into(self) -> i32 {
        self as i32
    }
}

impl From<std::io::Error> for ExitCode {
    fn from(err: std::io::Error) -> ExitCode {
        eprintln!("IO Error: {err:?}");
        ExitCode::IO
    }
}

impl From<toml::de::Error> for ExitCode {
    fn from(err: toml::de::Error) -> ExitCode {
        eprintln!("Config Error: {err:?}");
        ExitCode::Config
    }
}

impl From<ConfigError> for ExitCode {
    fn from(err: ConfigError) -> ExitCode {
        eprintln!("Config Error: {err}");
        match err {
            ConfigError::Io { .. } => ExitCode::IO,
            ConfigError::Toml(_) => ExitCode::Config,
        }
    }
}
