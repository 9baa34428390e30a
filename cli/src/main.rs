//! CLI entrypoint for stress-relief
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use relief_application::{GenerateReportUseCase, NoProgress, ProgressNotifier};
use relief_domain::{CredentialKind, Credentials, Model, ReliefSession, Severity, StressInput};
use relief_infrastructure::{
    ConfigLoader, FileConfig, GiphyImageSearch, JsonlConversationLogger, OpenAiGateway,
    build_http_client,
};
use relief_presentation::{
    Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReliefRepl, ReportExporter,
    SimpleProgress, read_entry,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting stress-relief");

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let mut params = config.generation_params();
    if let Some(model) = &cli.model {
        params = params.with_model(Model::from(model.as_str()));
    }
    info!("Model: {}", params.model);

    let output = OutputConfig {
        format: cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        show_progress: config.output.show_progress && !cli.quiet,
        report_file: config.output.report_file.clone(),
    };
    output.apply_color_preference();

    // === Dependency Injection ===
    let client = build_http_client(config.http.timeout()).context("Failed to create HTTP client")?;

    let openai = &config.providers.openai;
    let gateway = Arc::new(
        OpenAiGateway::with_base_url(client.clone(), &openai.base_url)
            .with_temperature(openai.temperature)
            .with_max_tokens(openai.max_tokens),
    );
    let image_search = Arc::new(
        GiphyImageSearch::with_base_url(client, &config.providers.giphy.base_url)
            .with_rating(config.providers.giphy_rating()),
    );

    let mut use_case = GenerateReportUseCase::new(gateway, image_search, params);

    let log_path = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.clone());
    if let Some(path) = log_path {
        let logger = JsonlConversationLogger::open(&path).with_context(|| {
            format!("Failed to open conversation log {}", path.display())
        })?;
        info!("Conversation log: {}", logger.path().display());
        use_case = use_case.with_conversation_logger(Arc::new(logger));
    }

    // Keys come from flags only and stay in memory
    let mut credentials = Credentials::new();
    if let Some(key) = &cli.openai_api_key {
        credentials.set(CredentialKind::TextGeneration, key);
    }
    if let Some(key) = &cli.giphy_api_key {
        credentials.set(CredentialKind::ImageSearch, key);
    }
    let mut session = ReliefSession::new(credentials);

    // Interactive mode
    if cli.interactive {
        let mut repl = ReliefRepl::new(use_case, session)
            .with_output(output)
            .with_category(cli.category.into())
            .with_tone(cli.tone.into());
        repl.run().await.context("Interactive session failed")?;
        return Ok(());
    }

    // One-shot mode - entry text is required
    let text = match read_entry(cli.text.as_deref(), cli.file.as_deref())
        .context("Failed to read entry text")?
    {
        Some(text) => text,
        None => bail!("Entry text is required. Pass TEXT, use --file, or start --interactive."),
    };

    let input = StressInput::new(text, cli.category.into(), cli.tone.into());
    if input.is_blank() {
        warn!("Entry text is empty; the report will be generic");
    }

    let progress = progress_notifier(output.show_progress);
    let report = match use_case
        .execute_with_progress(&mut session, input, progress.as_ref())
        .await
    {
        Ok(report) => report,
        Err(e) => {
            if let Some(kind) = e.missing_credential() {
                eprintln!("{}", ConsoleFormatter::format_credential_hint(kind));
            }
            return Err(e.into());
        }
    };

    println!("{}", ConsoleFormatter::format(&report, output.format));

    if let Some(target) = cli.save {
        let path = target.unwrap_or(output.report_file);
        let written = ReportExporter::save_last(&session, &path)?;
        eprintln!("Saved report to {}", written.display());
    }

    Ok(())
}

/// Log configuration warnings and fail on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("config error: {}", issue.message),
        }
    }
    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }
    Ok(())
}

/// Spinners on a terminal, plain lines otherwise.
fn progress_notifier(show: bool) -> Box<dyn ProgressNotifier> {
    if !show {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}
