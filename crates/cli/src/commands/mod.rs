pub mod discover;
pub mod executor;
pub mod init;
pub mod run;
pub mod session;

pub use discover::discover_command;
pub use executor::CliExecutor;
pub use init::init_command;
pub use run::{run_all_command, run_command};
pub use session::session_command;
