use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, hint, print, Badge, OutputMode};

const CHECKS: [&str; 3] = ["sqlite integrity", "month abbreviations", "metadata keys"];

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let catalog = ctx.open_catalog()?;
    let ui_ctx = ctx.ui_context(false, None);

    match catalog.check_integrity() {
        Ok(()) => {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        println!("Integrity check: OK");
                        for check in CHECKS {
                            println!("  {}", badge(&ui_ctx, Badge::Ok, check));
                        }
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("Integrity check: OK");
                        for check in CHECKS {
                            println!("check={} ok", check.replace(' ', "_"));
                        }
                        println!("status=ok");
                    }
                }
            }
            Ok(())
        }
        Err(err) => {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    eprintln!("Integrity check: FAILED");
                    print(
                        &ui_ctx,
                        &hint(
                            &ui_ctx,
                            "Restore from a safety snapshot with `magshelf restore <file>`.",
                        ),
                    );
                }
                OutputMode::Plain | OutputMode::Json => {
                    eprintln!("Integrity check: FAILED");
                    eprintln!("status=failed");
                }
            }
            Err(CliError::IntegrityFailed(err.to_string()).into())
        }
    }
}
