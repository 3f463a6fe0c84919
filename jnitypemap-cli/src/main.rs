mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })
    .context("failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    // jnitypemap info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("jnitypemap", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Build {
            paths,
            output,
            format,
            naming,
            parallel,
            namespace,
            class_name,
        } => commands::build::run(
            paths,
            &commands::build::BuildOptions {
                output: output.as_deref(),
                format: *format,
                config: naming.config().with_parallel(*parallel),
                namespace,
                class_name,
                global: &cli.global,
            },
        ),
        Command::Peers { paths, naming } => {
            commands::peers::run(paths, naming.config(), &cli.global)
        }
        Command::Name {
            paths,
            r#type,
            naming,
        } => commands::name::run(paths, r#type, naming.config(), &cli.global),
    }
}
