//! Magshelf CLI - a local catalog of magazine issues
//!
//! This is the command-line interface for Magshelf. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use magshelf_core::VERSION;

use crate::app::{init_logging, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{init, maintenance, misc, records, stats, transfer};
use crate::errors::exit_code_for;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let config_level = ctx
        .config()
        .ok()
        .flatten()
        .and_then(|config| config.log.level.clone());
    init_logging(cli.verbose, config_level.as_deref());

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::for_errors();

        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&error_msg);
        let message = match error_msg.find("\nHint:") {
            Some(idx) => &error_msg[..idx],
            None => error_msg.as_str(),
        };

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Extract a hint from an error message if it contains "Hint:",
/// or provide contextual hints for common error types.
fn extract_error_hint(error: &str) -> Option<String> {
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + 1..].trim_start_matches("Hint:").trim().to_string());
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("record not found") {
        return Some("Run `magshelf list` to find record IDs.".to_string());
    }

    if error_lower.contains("unknown sort column") {
        return Some("Valid columns: magazine, month, year, special, created.".to_string());
    }

    if error_lower.contains("invalid json") {
        return Some(
            "Pass a file written by `magshelf export`, or a JSON array of records.".to_string(),
        );
    }

    if error_lower.contains("backup destination") {
        return Some(
            "Ensure the destination path is writable and the parent directory exists."
                .to_string(),
        );
    }

    if error_lower.contains("integrity check failed") {
        return Some("Restore from a safety snapshot with `magshelf restore <file>`.".to_string());
    }

    if error_lower.contains("schema version") {
        return Some("This file was not created by this version of magshelf.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            records::handle_add(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            records::handle_edit(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            records::handle_delete(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            records::handle_show(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            records::handle_list(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            stats::handle_stats(ctx, args)?;
        }
        Some(Commands::Import(args)) => {
            transfer::handle_import(ctx, args)?;
        }
        Some(Commands::Restore(args)) => {
            transfer::handle_restore(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            transfer::handle_export(ctx, args)?;
        }
        Some(Commands::Reset(args)) => {
            maintenance::handle_reset(ctx, args)?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Magshelf v{}", VERSION);
            println!("\nQuickstart:");
            println!("  magshelf init");
            println!("  magshelf import issues.csv");
            println!("  magshelf add --magazine Playboy --month mar --year 75");
            println!("  magshelf list --magazine Playboy --chronological");
            println!("  magshelf stats");
            println!("\nRun `magshelf --help` for full usage.");
        }
    }

    Ok(())
}
