//! Interactive "create a new app" wizard built on a qmodel question tree.
//!
//! Answers are printed as JSON once every question is settled.

mod logging;
mod tree;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use qmodel::{Inputs, Platform, traverse};
use qmodel_dialoguer_wizard::DialoguerInteraction;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "qmodel-example",
    version,
    about = "Answer the questions for scaffolding a new app"
)]
struct Cli {
    /// Disable colors in prompts.
    #[arg(long)]
    plain: bool,

    /// Surface the wizard runs on; changes the options offered.
    #[arg(long, value_enum, default_value_t = PlatformArg::Cli)]
    platform: PlatformArg,

    /// Answer a question up front (`name=value`); it is then not asked.
    #[arg(long = "preset", value_name = "NAME=VALUE", value_parser = parse_preset)]
    presets: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlatformArg {
    Cli,
    Vscode,
    Vs,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Cli => Platform::CLI,
            PlatformArg::Vscode => Platform::VSCode,
            PlatformArg::Vs => Platform::VS,
        }
    }
}

fn parse_preset(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let tree = tree::new_app_tree().context("build question tree")?;

    let mut inputs = Inputs::new(cli.platform.into());
    for (name, value) in cli.presets {
        debug!(question = %name, value = %value, "preset");
        inputs.insert(name, value);
    }

    let mut ui = if cli.plain {
        DialoguerInteraction::plain()
    } else {
        DialoguerInteraction::new()
    };

    match traverse(&tree, &mut inputs, &mut ui) {
        Ok(()) => {}
        Err(err) if err.is_cancelled() => bail!("cancelled by user"),
        Err(err) => return Err(err).context("answer questions"),
    }

    let json = serde_json::to_string_pretty(&inputs).context("serialize answers")?;
    println!("{json}");
    Ok(())
}
