pub mod forms;
pub mod io;
pub mod output;
mod shell;

pub use shell::{run_cli, run_with_args, EXIT_INVALID, EXIT_TRANSPORT};
