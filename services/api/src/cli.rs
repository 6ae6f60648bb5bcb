use crate::calculate::{run_calculate, CalculateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use grade_boost::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Grade Boost",
    about = "Calculate weighted course grades and fetch improvement suggestions",
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
    /// Compute a final grade from the command line and print suggestions
    Calculate(CalculateArgs),
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
        Command::Calculate(args) => run_calculate(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["grade-boost-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn calculate_rejects_out_of_range_scores() {
        let result = Cli::try_parse_from([
            "grade-boost-api",
            "calculate",
            "--homework-weight",
            "100",
            "--homework-score",
            "140",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn calculate_accepts_partial_components() {
        let cli = Cli::try_parse_from([
            "grade-boost-api",
            "calculate",
            "--homework-weight",
            "100",
            "--homework-score",
            "88.5",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Calculate(args)) => {
                let request = args.grade_request();
                assert_eq!(request.total_weight(), 100.0);
                assert!(request.midterm.is_empty());
            }
            other => panic!("expected calculate command, got {other:?}"),
        }
    }
}
