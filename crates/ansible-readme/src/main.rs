use std::process::ExitCode;

use ansible_readme::cli::Cli;
use ansible_readme::logging::init_logging;
use ansible_readme::ConsoleReporter;
use clap::Parser;
use console::style;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let reporter = ConsoleReporter::new(cli.debug());
    cli.run(&reporter)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style(format!("Error: {:#}", err)).red());
            ExitCode::FAILURE
        }
    }
}
