#![doc = include_str!("../README.md")]

use clap::Parser;

mod cli;
mod replay;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
