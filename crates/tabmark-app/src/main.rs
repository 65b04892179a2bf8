mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// `--log-level` if given, else `tabmark=<logging.level>` from the config
/// file, else `tabmark=info`.
fn log_directive(args: &cli::Args) -> String {
    if let Some(directive) = &args.log_level {
        return directive.clone();
    }
    let level = args
        .config
        .clone()
        .or_else(|| tabmark_config::paths::config_file().ok())
        .and_then(|path| tabmark_config::toml_loader::load_from_path(&path).ok())
        .map(|config| config.logging.level.to_ascii_lowercase())
        .unwrap_or_else(|| "info".to_string());
    format!("tabmark={level}")
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so command output stays pipeable.
    let log_directive = log_directive(&args);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "tabmark=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("tabmark v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
