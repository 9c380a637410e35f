mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use erpview_core::RateService;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();

    match cli.command {
        // Shell completions need nothing else
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "erpview", &mut std::io::stdout());
            Ok(())
        }

        Command::Config(args) => {
            let settings = config::lenient_settings(&cli.global, cfg);
            commands::config_cmd::handle(args, &cli.global, &settings)
        }

        // Offline commands read only static catalogues
        Command::Options => {
            let settings = config::resolve_settings(&cli.global, cfg)?;
            commands::options::handle(&settings);
            Ok(())
        }
        Command::Zones(args) => {
            let settings = config::resolve_settings(&cli.global, cfg)?;
            commands::zones::handle(&args, &settings)
        }

        // Everything else talks to the services
        cmd => {
            let service_config = config::resolve_service(&cli.global, &cfg)?;
            let settings = config::resolve_settings(&cli.global, cfg)?;
            let service = RateService::new(&service_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &service, &settings).await
        }
    }
}
