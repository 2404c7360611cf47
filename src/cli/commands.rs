use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::report::{format_peak, render_tree};
use crate::application::{ApplicationError, Session, TraversalReport};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{max_path_sum, ScriptedTokens, TreeBuilder};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Interactive) => _interactive(load_settings(cli)?),
        Some(Commands::Show { tokens }) => _show(tokens, &load_settings(cli)?),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(&load_settings(cli)?),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
    }
}

/// Settings from files and environment, with the `--style` flag on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(style) = cli.style {
        settings.display = style;
    }
    debug!(?settings, "settings loaded");
    Ok(settings)
}

#[instrument(skip_all)]
fn _interactive(settings: Settings) -> CliResult<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), settings);
    session.run()?;
    Ok(())
}

#[instrument(skip(settings))]
fn _show(tokens: &[String], settings: &Settings) -> CliResult<()> {
    let builder = TreeBuilder::new(settings.grammar());
    let mut source = ScriptedTokens::new(tokens.iter());
    let tree = builder.build(&mut source)?;

    for (request, error) in source.rejected() {
        output::warning(&format!("skipped token for {request}: {error}"));
    }

    output::header("Tree");
    output::info(&render_tree(&tree, settings.display));
    if tree.is_empty() {
        return Ok(());
    }

    output::header("Traversals");
    output::info(&TraversalReport::from_tree(&tree));

    let peak = max_path_sum(&tree)?;
    output::header("Max Path Sum");
    output::info(&format_peak(&peak));
    Ok(())
}

fn _config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "cannot determine config directory".to_string(),
    })?;
    output::info(&path.display());
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
