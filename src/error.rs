use thiserror::Error;

use crate::core::config::ConfigError;

/// Fatal errors: anything that stops the board from starting or running.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_reads_as_terminal_error() {
        let err: Error = std::io::Error::other("no tty").into();
        assert_eq!(err.to_string(), "terminal error: no tty");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let parse = toml::from_str::<crate::core::config::KanbanConfig>("[general")
            .unwrap_err();
        let err: Error = ConfigError::from(parse).into();
        assert!(err.to_string().starts_with("config parse error"));
    }
}
