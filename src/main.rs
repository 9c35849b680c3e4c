use anyhow::Result;
use clap::Parser;

use args::{Args, Command};

mod args;
mod commands;
mod error;
mod extract;
mod header;
mod index;
mod misc;
mod parser;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.subcommand {
        Command::Split(split) => commands::split::split(split)?,
        Command::List(list) => commands::list::list(list)?,
        Command::Info(info) => commands::info::info(info)?,
    }

    Ok(())
}
