use std::io;

/// Errors that can occur during dotrunner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("`{command}` exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Discovery error: {0}")]
    DiscoveryError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

/// Result type alias for dotrunner operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message() {
        let err = Error::CommandFailed {
            command: "dotnet test -t -v=q".to_string(),
            code: Some(1),
            stderr: "MSBUILD : error MSB1003".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "`dotnet test -t -v=q` exited with code 1: MSBUILD : error MSB1003"
        );

        let killed = Error::CommandFailed {
            command: "dotnet vstest".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.to_string(), "`dotnet vstest` exited with a signal: ");
    }
}
