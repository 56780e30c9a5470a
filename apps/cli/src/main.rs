use std::process::ExitCode;

use cardpen::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cardpen::init_tracing(cli.log_directive());

    match cardpen::run(&cli, |key| std::env::var(key).ok()) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
