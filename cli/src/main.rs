//! CLI entrypoint for pareto
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use pareto_application::{Clipboard, NoClipboard, SubmissionController};
use pareto_infrastructure::{
    CommandClipboard, CommonMarkRenderer, ConfigLoader, FileConfig, HttpSummarizerGateway,
};
use pareto_presentation::{Cli, ConsoleView, FormRepl};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting pareto");

    // === Configuration ===
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_cli_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        if cli.no_config {
            println!("Configuration files disabled (--no-config)");
        } else {
            print!("{}", ConfigLoader::describe_config_sources(cli.config.as_ref()));
        }
        println!();
        println!("Effective configuration:");
        println!();
        print!(
            "{}",
            config
                .to_toml()
                .context("Failed to serialize configuration")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    let interactive =
        cli.interactive || (!cli.has_inline_input() && std::io::stdin().is_terminal());

    // === Dependency Injection ===
    let gateway = Arc::new(HttpSummarizerGateway::from_config(&config.api)?);
    info!("Summarization endpoint: {}", gateway.endpoint());

    let clipboard: Arc<dyn Clipboard> = match CommandClipboard::from_config(&config.clipboard) {
        Some(clipboard) => Arc::new(clipboard),
        None => {
            debug!("No clipboard command available");
            Arc::new(NoClipboard)
        }
    };

    let view = ConsoleView::new(cli.output)
        .with_progress(!cli.quiet)
        .with_char_count(interactive && !cli.quiet);

    let mut controller = SubmissionController::new(gateway, clipboard)
        .with_view(Arc::new(view))
        .with_model(config.model.default.clone());
    if config.output.render {
        controller = controller.with_renderer(Arc::new(CommonMarkRenderer::new()));
    }
    let controller = Arc::new(controller);

    // Interactive form
    if interactive {
        let mut repl = FormRepl::new(controller);
        if let Some(path) = &config.repl.history_file {
            repl = repl.with_history_file(Some(PathBuf::from(path)));
        }
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot submission; failures were already reported by the view
    let text = read_input(&cli)?;
    controller.on_text_changed(text);

    if let Err(e) = controller.submit().await {
        debug!("Submission failed: {:?}", e);
        return Ok(ExitCode::FAILURE);
    }

    if cli.copy
        && let Err(e) = controller.on_copy_requested().await
    {
        warn!("Copy failed: {}", e);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level, optionally mirrored to a file
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    let Some(path) = log_file else {
        registry.init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(false)
        .with_ansi(false);
    registry.with(file_layer).init();

    Ok(Some(guard))
}

/// CLI flags take priority over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
    }
    if let Some(model) = &cli.model {
        config.model.default = model.clone();
    }
    if cli.no_render {
        config.output.render = false;
    }
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
