mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Show matrixgraph info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("matrixgraph", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Info { path } => commands::info::run(path, &cli.global),
        Command::Matrix { path } => commands::matrix::run(path, &cli.global),
        Command::Dfs { path, start } => {
            commands::traverse::run(path, start, commands::traverse::Order::Depth, &cli.global)
        }
        Command::Bfs { path, start } => {
            commands::traverse::run(path, start, commands::traverse::Order::Breadth, &cli.global)
        }
        Command::Topsort { path } => commands::topsort::run(path, &cli.global),
        Command::Path { path, from, to } => commands::path::run(path, from, to, &cli.global),
        Command::Dot { path, title } => commands::dot::run(path, title.as_deref()),
    }
}
