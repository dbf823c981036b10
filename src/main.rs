use clap::Parser;
use coverad::logger::{self, LogLevel, LoggerConfig};
use coverad::{AdWorkflow, AttemptState, GeminiConfig, InputCapture, OutputPreset};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a social media ad from a book cover.
#[derive(Parser, Debug)]
#[command(name = "coverad", version)]
struct Args {
    /// Path to the book cover image
    cover: PathBuf,

    /// Book title (required)
    #[arg(long, short)]
    title: String,

    /// Short description of the book; a stock blurb is used when omitted
    #[arg(long, short, default_value = "")]
    description: String,

    /// Output format: story (9:16), square (1:1) or landscape (16:9)
    #[arg(long, short, default_value = "story")]
    preset: String,

    /// Directory the generated PNG is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Override the Gemini image model
    #[arg(long)]
    model: Option<String>,

    /// Log debug output
    #[arg(long, short)]
    verbose: bool,

    /// Emit log records as JSON lines
    #[arg(long)]
    json_logs: bool,
}

/// How the `.env` load went, as a level and message for the log.
fn dotenv_outcome(result: dotenv::Result<PathBuf>) -> (log::Level, String) {
    match result {
        Ok(path) => (log::Level::Info, format!(".env loaded from {}", path.display())),
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => (
            log::Level::Warn,
            "No .env file found, using system environment variables".to_string(),
        ),
        Err(e) => (log::Level::Warn, format!("Failed to load .env: {}", e)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let log_config = LoggerConfig::new()
        .with_level(level)
        .with_colors(!args.json_logs)
        .with_json_output(args.json_logs);
    if let Err(e) = logger::init_with_config(log_config) {
        eprintln!("{}", e);
    }
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (env_level, env_message) = dotenv_outcome(dotenv::dotenv());
    log::log!(env_level, "{}", env_message);

    let mut config = GeminiConfig::from_env();
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    logger::log_config_info(&config);
    if !config.has_credential() {
        log::warn!("GEMINI_API_KEY is not set; the attempt will be rejected");
    }

    let mut capture = InputCapture::new();
    if let Err(e) = capture.accept_image_file(&args.cover).await {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }
    capture.set_title(&args.title);
    capture.set_description(&args.description);
    if !capture.select_preset(&args.preset) {
        log::error!(
            "Unknown preset '{}'. Choose one of: {}",
            args.preset,
            OutputPreset::ids().collect::<Vec<_>>().join(", ")
        );
        return ExitCode::FAILURE;
    }

    let mut workflow = AdWorkflow::from_config(&config);
    match workflow.generate(&capture).await {
        AttemptState::Succeeded(ad) => match ad.save(&args.out_dir, capture.title()).await {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        },
        AttemptState::Failed(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
        other => {
            log::error!("Attempt ended in unexpected state: {}", other.name());
            ExitCode::FAILURE
        }
    }
}
