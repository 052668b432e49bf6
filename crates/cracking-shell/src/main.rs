use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tracing::info;

use cracking_shell::config::{self, LogFormat};
use cracking_shell::session::{self, Session};

#[derive(Parser)]
#[command(name = "cracking-the-code")]
#[command(about = "Alzheimer's education, personal profile and carer summary", version)]
struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log output format (overrides the config file)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Write the default configuration to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config_from(&config_path)?;

    init_logging(cli.log_format.unwrap_or(config.log_format));
    info!(path = %config_path.display(), audience = %config.default_audience, "config loaded");

    if cli.init_config {
        config::save_config_to(&config_path, &config)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let today = jiff::Zoned::now().date();
    let mut session = Session::new(&config).with_prepared_on(today);
    session::run(&mut session)
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
