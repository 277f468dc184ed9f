// Command line interface
//
// Flag parsing and action resolution; the executor layer consumes the
// resolved configuration and never touches argv itself.

pub mod error;
pub mod parser;

pub use error::{CliError, CliResult};
pub use parser::{Action, Config, build_cli, parse_config};
