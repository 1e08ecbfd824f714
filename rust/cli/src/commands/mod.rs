//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`. Output
//! streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) are passed in so
//! tests can drive the handlers with in-memory buffers.

mod cfg;
mod compare;
mod equity;
mod play;
mod score;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use equity::handle_equity_command;
pub use play::handle_play_command;
pub use score::handle_score_command;
