//! Appraise server binary: load `.env` and settings, initialize logging, run
//! the HTTP server.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "appraise")]
#[command(about = "Appraise — AI property investment review server")]
struct Args {
    /// Port to listen on (overrides PORT env; default 8080)
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Completion model (overrides REVIEW_MODEL env; default gpt-3.5-turbo)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Max output tokens per review (overrides REVIEW_MAX_OUTPUT_TOKENS env; default 400)
    #[arg(long, value_name = "N")]
    max_output_tokens: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::load_dotenv(None);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(model) = args.model {
        settings.model = model;
    }
    if let Some(max) = args.max_output_tokens {
        settings.max_output_tokens = max;
    }

    tracing::info!(port = settings.port, model = %settings.model, "starting review server");
    serve::run_serve(&settings).await
}
