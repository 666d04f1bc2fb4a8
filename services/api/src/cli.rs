use crate::demo::{run_appraise, run_demo, AppraiseArgs, DemoArgs};
use crate::server;
use appraisal::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Faculty Appraisal Service",
    about = "Score faculty activity workbooks and populate appraisal reports",
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
    /// Run one appraisal from local files and print the score summary
    Appraise(AppraiseArgs),
    /// Run an end-to-end demo over an embedded sample workbook
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
        Command::Appraise(args) => run_appraise(args),
        Command::Demo(args) => run_demo(args),
    }
}
