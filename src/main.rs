use std::process;
use std::sync::Arc;

use anyhow::Result;

use jikko::cli::{Action, build_cli, parse_config};
use jikko::executor::{
    CommandExecutor, ExecutorFactory, Platform, SystemInfo, compat,
};
use jikko::logging::{Logger, ModuleLogger};

#[tokio::main]
async fn main() {
    // Parse command line configuration; clap renders its own usage text
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let is_failure = err.use_stderr();
            let _ = err.print();
            process::exit(if is_failure { 1 } else { 0 });
        }
    };

    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let logger = Arc::new(Logger::new(config.log_level));
    let log = ModuleLogger::new(&logger, "main");

    // Validate executor and shell compatibility before anything is spawned
    if let Err(err) = compat::validate(config.executor, config.shell) {
        log.error(&err.to_string());
        process::exit(1);
    }

    log.info("Starting command executor");

    let platform = Platform::current();
    let shell = compat::preferred_shell(config.executor, config.shell, platform);

    let factory = ExecutorFactory::new(&logger);
    let executor = factory.create(config.executor, shell);

    let info = SystemInfo::query();
    log.info(&format!("Running on {}/{}", info.os, info.arch));
    log.info(&format!("Using shell: {shell}"));
    log.info(&format!("Using executor: {}", config.executor));

    if let Err(err) = run(config.action, executor.as_ref(), &log).await {
        log.error(&format!("{err:#}"));
        process::exit(1);
    }
}

async fn run(action: Action, executor: &dyn CommandExecutor, log: &ModuleLogger) -> Result<()> {
    match action {
        Action::Execute { command } => {
            let command = command.unwrap_or_default();
            log.debug(&format!("Executing command: {command}"));
            executor.execute(&command).await?;
            log.info("Command executed successfully");
        }
        Action::Encode { command } => {
            log.debug(&format!("Encoding command: {command}"));
            println!("Base64 encoded command: {}", executor.encode(&command));
            log.info("Command encoded successfully");
        }
        Action::Decode { encoded } => {
            log.debug(&format!("Decoding base64 command, length: {}", encoded.len()));
            println!("Decoded command: {}", executor.decode(&encoded)?);
            log.info("Command decoded successfully");
        }
        Action::Info { json } => print_system_info(json)?,
    }
    Ok(())
}

fn print_system_info(json: bool) -> Result<()> {
    let info = SystemInfo::query();
    let platform = Platform::current();

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let unknown = || "unknown".to_string();
    println!("System Information:");
    println!("  OS: {}", info.os);
    println!("  Architecture: {}", info.arch);
    println!("  Hostname: {}", info.hostname.clone().unwrap_or_else(unknown));
    println!("  OS Version: {}", info.os_version.clone().unwrap_or_else(unknown));
    println!("  Kernel: {}", info.kernel_version.clone().unwrap_or_else(unknown));
    println!("  CPU Cores: {}", info.cpu_cores);
    println!("  Is Windows: {}", platform.is_windows());
    println!("  Is Linux: {}", platform.is_linux());
    println!("  Is Unix-like: {}", platform.is_unix());
    Ok(())
}
