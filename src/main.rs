use clap::Parser;
use restyle::{
    logger::{self, LogLevel, LoggerConfig},
    Config, DesignMode, GeminiClient, GenerationState, ImagePayload, StyleError,
    StyleRequestAdapter,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "restyle", version, about = "Try a new hairstyle on your photo with Gemini")]
struct Cli {
    /// Your photo (front-facing, face unobstructed)
    #[arg(long, required_unless_present = "list_models")]
    photo: Option<PathBuf>,

    /// Optional photo of the hairstyle to copy (used in custom mode)
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Description of the style you want (used in custom mode)
    #[arg(long, default_value = "")]
    prompt: String,

    /// auto: let the model pick a flattering style; custom: follow prompt/reference
    #[arg(long, default_value = "auto")]
    mode: DesignMode,

    /// Where to save the result (defaults to RESTYLE_OUTPUT_DIR or .)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Also append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the supported models and exit
    #[arg(long)]
    list_models: bool,
}

fn load_image(path: &Path) -> restyle::Result<ImagePayload> {
    let bytes = std::fs::read(path).map_err(|e| StyleError::io(path, e))?;
    let image = ImagePayload::from_bytes_sniffed(&bytes);
    log::debug!(
        "Loaded {} as {} ({} bytes)",
        path.display(),
        image.mime_type(),
        bytes.len()
    );
    Ok(image)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Info };
    let mut log_config = LoggerConfig::new()
        .with_level(level)
        .with_json_output(cli.log_json);
    if let Some(path) = &cli.log_file {
        log_config = log_config.with_file_output(&path.to_string_lossy());
    }
    if let Err(e) = logger::init_with_config(log_config) {
        eprintln!("{}", e);
    }
    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using system environment variables");
    }

    if cli.list_models {
        for model in StyleRequestAdapter::supported_models() {
            println!(
                "{} - {} ({}): {}",
                model.id, model.name, model.provider, model.description
            );
        }
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> restyle::Result<()> {
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env();
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }
    logger::log_config_info(&config);

    let client = GeminiClient::new(config.gemini.clone().unwrap_or_default())?;
    let mut session = client.session();

    // clap enforces --photo unless --list-models, which returned earlier
    let photo_path = cli
        .photo
        .ok_or_else(|| StyleError::ConfigError("--photo is required".into()))?;
    session.set_user_photo(Some(load_image(&photo_path)?));

    if let Some(reference) = &cli.reference {
        if cli.mode == DesignMode::Auto {
            log::warn!("Reference photo is also forwarded in auto mode");
        }
        session.set_reference_photo(Some(load_image(reference)?));
    }
    if cli.mode == DesignMode::Auto && !cli.prompt.is_empty() {
        log::warn!("--prompt is ignored in auto mode, use --mode custom");
    }
    session.set_prompt(cli.prompt);
    session.set_mode(cli.mode);

    log::info!("💇 AI stylist is designing your new look, this can take a few seconds...");
    match session.generate().await {
        GenerationState::Succeeded(_) => {}
        GenerationState::Failed(e) => return Err(e.clone()),
        _ => return Err(StyleError::EmptyResult),
    }

    if let Some(path) = session.save_result(&config.output_dir())? {
        println!("{}", path.display());
    }
    Ok(())
}
