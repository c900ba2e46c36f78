use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::LevelFilter;

use smaze::app;

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "smaze")]
struct Args {
    #[clap(help = "Path to the maze file")]
    maze_file: PathBuf,
    #[clap(short, long, action, help = "Render the maze without solving it")]
    no_solve: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    better_panic::install();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match app::run(&args.maze_file, args.no_solve) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
