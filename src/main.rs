use clap::{Parser, Subcommand};
use std::ffi::OsString;
use setups::interpreter::colors;
use setups::Setups;

#[derive(Parser)]
#[command(name = "setups")]
#[command(about = "Setup projects from declarative setup scripts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a setup
    Run {
        /// The setup to run
        setup: String,
    },
    /// List the setups
    List,
}

const SUBCOMMANDS: &[&str] = &["run", "list", "help"];

/// The original UI treats `setups foo` as `setups run foo`: a first argument
/// that is not a subcommand and not a flag selects run.
fn with_implicit_run(mut args: Vec<OsString>) -> Vec<OsString> {
    if let Some(first) = args.get(1).and_then(|arg| arg.to_str()) {
        if !SUBCOMMANDS.contains(&first) && !first.starts_with('-') {
            args.insert(1, OsString::from("run"));
        }
    }
    args
}

fn main() {
    let cli = Cli::parse_from(with_implicit_run(std::env::args_os().collect()));

    let status = match cli.command {
        Commands::Run { setup } => Setups::from_home().run(&setup),
        Commands::List => match Setups::from_home().list() {
            Ok(names) => {
                println!("Available setups:");
                for name in names {
                    println!("{}", name);
                }
                0
            }
            Err(error) => {
                eprintln!("{}", colors::red(&error.to_string()));
                1
            }
        },
    };

    std::process::exit(status);
}
