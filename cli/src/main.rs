//! CLI entrypoint for ryg-status
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the questionnaire API.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use ryg_application::{
    ClassificationLogger, ClassifierStrategy, ClassifyResponsesUseCase, DrawQuestionsUseCase,
    LlmGateway, QuestionBank, RuleClassifier, ServiceClassifier, StatusClassifier,
};
use ryg_domain::Severity;
use ryg_infrastructure::{
    ConfigLoader, FileConfig, JsonQuestionStore, JsonlClassificationLogger, OpenAiGateway,
};
use ryg_presentation::{AppState, Cli, status_router};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());
    ConfigLoader::load_dotenv();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut config);
    check_config(&config)?;

    info!("Starting ryg-status");

    // === Dependency Injection ===
    let store = Arc::new(JsonQuestionStore::new(&config.questions.bank_path));
    let bank = Arc::new(QuestionBank::new(store));
    if let Err(e) = bank.load().await {
        // Not fatal: the bank retries on the next request
        error!("Question bank unavailable at startup: {}", e);
    }

    let questionnaire = config.questionnaire_config();
    let classifier = build_classifier(&config)?;
    info!("Using {} classifier", classifier.strategy());

    let mut classify = ClassifyResponsesUseCase::new(classifier, questionnaire.validation);
    if let Some(path) = &config.logging.classification_log {
        match JsonlClassificationLogger::open(path) {
            Ok(logger) => {
                info!("Classification log: {}", logger.path().display());
                let logger: Arc<dyn ClassificationLogger> = Arc::new(logger);
                classify = classify.with_classification_logger(logger);
            }
            Err(e) => warn!(
                "Classification log disabled, cannot open {}: {}",
                path.display(),
                e
            ),
        }
    }

    let shutdown = CancellationToken::new();
    let state = AppState::new(
        Arc::new(DrawQuestionsUseCase::new(bank, &questionnaire)),
        Arc::new(classify),
    )
    .with_shutdown(shutdown.clone());

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, status_router(state))
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to daily files.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer().with_target(false);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ryg-status.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(console)
                .with(file)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(console)
                .init();
            None
        }
    }
}

/// CLI flags take precedence over every configuration source.
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(arg) = cli.classifier {
        config.classifier.strategy = ClassifierStrategy::from(arg).as_str().to_string();
    }
    if let Some(path) = &cli.bank {
        config.questions.bank_path = path.clone();
    }
    if let Some(size) = cli.sample_size {
        config.questions.sample_size = size;
    }
    if let Some(path) = &cli.classification_log {
        config.logging.classification_log = Some(path.clone());
    }
}

/// Log every issue; abort if any is an error.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => {
                error!("{}", issue.message);
                errors += 1;
            }
        }
    }
    if errors > 0 {
        bail!("Configuration has {} error(s); see log for details", errors);
    }
    Ok(())
}

fn build_classifier(config: &FileConfig) -> Result<Arc<dyn StatusClassifier>> {
    let strategy = config
        .classifier
        .parse_strategy()
        .0
        .ok_or_else(|| anyhow!("Unknown classifier strategy: {}", config.classifier.strategy))?;

    let classifier: Arc<dyn StatusClassifier> = match strategy {
        ClassifierStrategy::Rule => Arc::new(RuleClassifier),
        ClassifierStrategy::Service => {
            let openai = &config.providers.openai;
            let gateway = OpenAiGateway::from_config(openai);
            if !gateway.is_configured() {
                warn!(
                    "No API key found in ${} or providers.openai.api_key; every submission will classify as Caution",
                    openai.api_key_env
                );
            }
            Arc::new(ServiceClassifier::new(
                Arc::new(gateway),
                config.service_classifier_config(),
            ))
        }
    };
    Ok(classifier)
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    shutdown.cancel();
}
