use crate::batch::{run_evaluate, run_extract, run_gap, run_train, EvaluateArgs, ExtractArgs, GapArgs, TrainArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillgap::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Gap Analyzer",
    about = "Analyze learner resumes against job-role skill requirements from the command line",
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
    /// Print extracted skills for every stored resume
    Extract(ExtractArgs),
    /// Compute skill gaps for all stored resumes against all job roles
    Gap(GapArgs),
    /// Train the role classifier from a labeled dataset and persist both artifacts
    Train(TrainArgs),
    /// Evaluate classifier accuracy against a labeled dataset
    Evaluate(EvaluateArgs),
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
        Command::Extract(args) => run_extract(args),
        Command::Gap(args) => run_gap(args),
        Command::Train(args) => run_train(args),
        Command::Evaluate(args) => run_evaluate(args),
    }
}
