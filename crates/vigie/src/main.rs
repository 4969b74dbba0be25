pub mod commands;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator, Shell};
use clap_complete_nushell::Nushell;
use commands::Commands;

#[derive(Parser)]
#[command(name = "vigie", author, version, about, long_about = None)]
pub struct Cli {
    /// Print shell completions instead of talking to the server
    #[arg(long = "generate", value_enum)]
    generator: Option<Shell>,
    /// Print nushell completions instead of talking to the server
    #[arg(long = "generate-nushell")]
    nushell: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Main function of the vigie command line tool
fn main() {
    let cli = Cli::parse();

    if let Some(generator) = cli.generator {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {generator:?}...");
        print_completions(generator, &mut cmd);
        return;
    }

    if cli.nushell {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for nushell...");
        print_completions(Nushell, &mut cmd);
        return;
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .unwrap();

    let outcome: Result<()> = commands::handle_command(cli, &client);

    if let Err(error) = outcome {
        let error = format!("{:?}", error)
            .replace("\\n", "\n")
            .replace("\"", "");
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut std::io::stdout(),
    );
}
