pub mod parser;
pub mod workspace;

pub use parser::{SessionCommand, parse_session_line};
pub use workspace::Workspace;
