use crate::demo::{run_demo, run_match, run_profile, DemoArgs, MatchArgs, ProfileArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use yojana_setu::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Yojana Setu",
    about = "Match applicants to government schemes from a plain-language description",
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
    /// Print the profile extracted from a description
    Profile(ProfileArgs),
    /// Rank a scheme catalog against a description
    Match(MatchArgs),
    /// Run the documented example queries against the built-in catalog
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
    /// Scheme catalog (.json or .csv); defaults to YOJANA_CATALOG_PATH or the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Profile(args) => run_profile(args),
        Command::Match(args) => run_match(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["yojana-setu-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn match_accepts_catalog_and_limit() {
        let cli = Cli::try_parse_from([
            "yojana-setu-api",
            "match",
            "I am a farmer from Bihar",
            "--catalog",
            "schemes.csv",
            "--limit",
            "3",
            "--json",
        ])
        .expect("parses");

        let Some(Command::Match(args)) = cli.command else {
            panic!("expected match command");
        };
        assert_eq!(args.query, "I am a farmer from Bihar");
        assert_eq!(args.catalog, Some(PathBuf::from("schemes.csv")));
        assert_eq!(args.limit, Some(3));
        assert!(args.json);
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from(["yojana-setu-api", "serve", "--port", "8080"])
            .expect("parses");
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, Some(8080));
        assert!(args.host.is_none());
    }

    #[test]
    fn profile_requires_text() {
        assert!(Cli::try_parse_from(["yojana-setu-api", "profile"]).is_err());
    }
}
