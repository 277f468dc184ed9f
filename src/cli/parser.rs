// Clap-based command line parser
//
// Produces the resolved configuration the executor layer consumes: executor
// type, shell type, log level, and the requested action. Flags may appear
// before or after the action name, but anything after the first command word
// belongs to the command being executed.

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::cli::error::{CliError, CliResult};
use crate::executor::{ExecutorType, ShellType};
use crate::logging::LogLevel;

/// Resolved command line configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LogLevel,
    pub shell: ShellType,
    pub executor: ExecutorType,
    pub action: Action,
}

/// The requested action and its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a command; `None` runs the OS-specific default.
    Execute { command: Option<String> },
    /// Print the base64 encoding of a command.
    Encode { command: String },
    /// Print the decoded form of a base64 command.
    Decode { encoded: String },
    /// Print a system information snapshot.
    Info { json: bool },
}

/// Build the clap command definition.
pub fn build_cli() -> Command {
    Command::new("jikko")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cross-platform shell command executor with plaintext and base64 execution strategies")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .value_parser(["debug", "info", "warn", "error", "fatal"])
                .ignore_case(true)
                .default_value("error")
                .global(true)
                .help("Logging level"),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .value_name("SHELL")
                .value_parser(["auto", "cmd", "powershell", "ps", "ps1", "sh"])
                .ignore_case(true)
                .default_value("auto")
                .global(true)
                .help("Shell used to run commands (auto chooses per OS)"),
        )
        .arg(
            Arg::new("executor")
                .long("executor")
                .value_name("EXECUTOR")
                .value_parser(["base64", "plain"])
                .ignore_case(true)
                .default_value("base64")
                .global(true)
                .help("Execution strategy (base64 is not compatible with cmd)"),
        )
        .subcommand(
            Command::new("execute")
                .about("Execute a command; runs an OS-specific default when omitted")
                .arg(
                    Arg::new("command")
                        .value_name("COMMAND")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .help("Command to run"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a command to base64")
                .arg(
                    Arg::new("command")
                        .value_name("COMMAND")
                        .num_args(1..)
                        .required(true)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .help("Command to encode"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decode a base64 encoded command")
                .arg(
                    Arg::new("encoded")
                        .value_name("BASE64")
                        .required(true)
                        .help("Base64 encoded command"),
                ),
        )
        .subcommand(
            Command::new("info").about("Show system information").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Emit the snapshot as JSON"),
            ),
        )
}

/// Resolve parsed matches into a configuration.
pub fn parse_config(matches: &ArgMatches) -> CliResult<Config> {
    let log_level = option_value(matches, "log-level")?.parse::<LogLevel>().map_err(CliError::parse)?;
    let shell = option_value(matches, "shell")?.parse::<ShellType>().map_err(CliError::parse)?;
    let executor = option_value(matches, "executor")?.parse::<ExecutorType>().map_err(CliError::parse)?;

    let action = match matches.subcommand() {
        Some(("execute", sub)) => Action::Execute {
            command: joined_words(sub, "command"),
        },
        Some(("encode", sub)) => Action::Encode {
            command: joined_words(sub, "command")
                .ok_or_else(|| CliError::MissingArgument("command".to_string()))?,
        },
        Some(("decode", sub)) => Action::Decode {
            encoded: sub
                .get_one::<String>("encoded")
                .cloned()
                .ok_or_else(|| CliError::MissingArgument("encoded".to_string()))?,
        },
        Some(("info", sub)) => Action::Info {
            json: sub.get_flag("json"),
        },
        _ => return Err(CliError::invalid_command("no action specified")),
    };

    Ok(Config {
        log_level,
        shell,
        executor,
        action,
    })
}

fn option_value<'a>(matches: &'a ArgMatches, name: &str) -> CliResult<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| CliError::MissingArgument(name.to_string()))
}

/// Join the words of a multi-valued positional into one command string.
fn joined_words(matches: &ArgMatches, name: &str) -> Option<String> {
    let words: Vec<String> = matches.get_many::<String>(name)?.cloned().collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
