use anyhow::Result;
use clap::Parser;
use snipgen::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG-driven diagnostics on stderr; silent by default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Extract(args) => snipgen::core::extract_run(args, &ctx),
        Commands::Init(args) => snipgen::infra::config::init(args, &ctx),
        Commands::Completions(args) => snipgen::completion::run(args),
    }
}
