use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hr_assess::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HR Assessment",
    about = "Run and demonstrate the candidate assessment service from the command line",
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
    /// Score one standard section from a JSON answers file
    Score(ScoreArgs),
    /// Walk a synthetic candidate through the quiz and the HR console
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
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
