/// A line typed into `dotrunner session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Discover,
    Run { name: String, skip_build: bool },
    RunAll { skip_build: bool },
    Rerun,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_session_line(line: &str) -> SessionCommand {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    let skip_build = match words.iter().position(|word| *word == "--skip-build") {
        Some(pos) => {
            words.remove(pos);
            true
        }
        None => false,
    };

    match words.as_slice() {
        [] if skip_build => SessionCommand::Invalid(line.trim().to_string()),
        [] => SessionCommand::Empty,
        ["discover" | "d"] => SessionCommand::Discover,
        ["run" | "r", name] => SessionCommand::Run {
            name: (*name).to_string(),
            skip_build,
        },
        ["run-all" | "a"] => SessionCommand::RunAll { skip_build },
        ["rerun" | "rr"] => SessionCommand::Rerun,
        ["help" | "?"] => SessionCommand::Help,
        ["quit" | "exit" | "q"] => SessionCommand::Quit,
        _ => SessionCommand::Invalid(line.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_name() {
        assert_eq!(
            parse_session_line("run Api.Tests.Creates"),
            SessionCommand::Run {
                name: "Api.Tests.Creates".to_string(),
                skip_build: false
            }
        );
        assert_eq!(
            parse_session_line("  r --skip-build Api.Tests.Creates  "),
            SessionCommand::Run {
                name: "Api.Tests.Creates".to_string(),
                skip_build: true
            }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_session_line("discover"), SessionCommand::Discover);
        assert_eq!(
            parse_session_line("run-all --skip-build"),
            SessionCommand::RunAll { skip_build: true }
        );
        assert_eq!(parse_session_line("rerun"), SessionCommand::Rerun);
        assert_eq!(parse_session_line("quit"), SessionCommand::Quit);
        assert_eq!(parse_session_line("   "), SessionCommand::Empty);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_session_line("run"),
            SessionCommand::Invalid("run".to_string())
        );
        assert_eq!(
            parse_session_line("rerun now"),
            SessionCommand::Invalid("rerun now".to_string())
        );
        assert_eq!(
            parse_session_line("--skip-build"),
            SessionCommand::Invalid("--skip-build".to_string())
        );
    }
}
