use std::process::ExitCode;

use clap::{arg, ArgAction, Command};
use tracing::Level;

mod run;

use run::run_ops;

pub fn cli() -> Command {
    Command::new("linked-stack")
        .about("drive a linked stack from the command line")
        .version("0.1.0")
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .arg(
                    arg!(<OP> ... "Operations: push=<value>, pop, top, clear, len, print, list")
                        .action(ArgAction::Append),
                )
                .arg(arg!(-d --debug "Print debug information"))
                .arg_required_else_help(true)
                .about("Run operations against an empty stack"),
        )
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_cli() -> ExitCode {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("run", args)) => {
            let debug = args.get_flag("debug");
            init_tracing(debug);

            let ops: Vec<&str> = args
                .get_many::<String>("OP")
                .map(|ops| ops.map(String::as_str).collect())
                .unwrap_or_default();

            let mut lines = Vec::new();
            let result = run_ops(&ops, &mut lines);
            for line in lines {
                println!("{line}");
            }

            if let Err(error) = result {
                eprintln!("{error:?}");
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        _ => ExitCode::FAILURE,
    }
}
