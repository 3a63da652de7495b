use crate::demo::{run_demo, run_lookup, DemoArgs, LookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wikibio::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wikimedia Name Search",
    about = "Resolve person names to Wikipedia short descriptions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a single name against the configured live endpoint
    Lookup(LookupArgs),
    /// Walk the lookup pipeline over built-in fixture articles, offline
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lookup(args) => run_lookup(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
