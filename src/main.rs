mod cli;
mod config;
mod journal;
mod report;
mod store;
mod user;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "userdemo",
    about = "Create a user, save it, and look it up from a mock store"
)]
pub struct Args {
    #[arg(long, env = "USERDEMO_NAME", help = "Name of the user to create")]
    pub name: Option<String>,

    #[arg(long, env = "USERDEMO_EMAIL", help = "Email of the user to create")]
    pub email: Option<String>,

    #[arg(
        long,
        value_name = "ID",
        allow_negative_numbers = true,
        help = "Look up this id instead of the created user's"
    )]
    pub lookup_id: Option<i64>,

    #[arg(long, help = "Print the retrieved user as JSON")]
    pub json: bool,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Write a JSONL journal of store activity to this directory")]
    pub journal_dir: Option<PathBuf>,

    #[arg(long, help = "Verbose output (info-level logs)")]
    pub verbose: bool,

    #[arg(long, help = "Debug output (debug-level logs)")]
    pub debug: bool,
}

fn init_tracing(args: &Args) {
    let default = if args.debug {
        "userdemo=debug"
    } else if args.verbose {
        "userdemo=info"
    } else {
        "userdemo=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args);

    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from(config_path)?
    } else {
        config::Config::load()?
    };

    if let Err(errors) = cfg.validate() {
        for err in &errors {
            tracing::error!("config {}", err);
        }
        return Err(anyhow::anyhow!(
            "invalid configuration ({} error(s))",
            errors.len()
        ));
    }

    let ctx = cli::Context {
        args,
        config: cfg,
        session_id: uuid::Uuid::new_v4().to_string(),
    };
    tracing::debug!(session_id = %ctx.session_id, "starting run");

    let mut store = cli::build_store(&ctx)?;
    let stdout = std::io::stdout();
    cli::run(&ctx, &mut store, &mut stdout.lock())
}
