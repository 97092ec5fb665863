//! `magshelf init`: create the catalog database and a default config.

use std::path::PathBuf;

use magshelf_core::{Catalog, VERSION};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_backups_dir, write_config, MagshelfConfig};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);

    let catalog_path = match args.path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => ctx.catalog_path()?,
    };
    let existed = catalog_path.exists();

    if let Some(parent) = catalog_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create catalog directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let catalog = Catalog::init(&catalog_path)?;
    let count = catalog.count()?;

    let config_path = resolve_config_path()?;
    let config_written = if config_path.exists() {
        false
    } else {
        let config = MagshelfConfig::new(catalog_path.clone(), default_backups_dir()?);
        write_config(&config_path, &config)?;
        true
    };

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            let version_line = format!("Magshelf v{}", VERSION);
            println!("{}", styled(&version_line, styles::DIM, ui_ctx.color));
            let message = if existed {
                format!(
                    "Catalog already exists at {} ({} records)",
                    catalog_path.display(),
                    count
                )
            } else {
                format!("Initialized catalog at {}", catalog_path.display())
            };
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, &message));
            if config_written {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Ok,
                        &format!("Config written to {}", config_path.display()),
                    ),
                );
            }
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "magshelf import <file>  \u{00B7}  magshelf add  \u{00B7}  magshelf --help",
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            if existed {
                println!("Catalog already exists at {}", catalog_path.display());
            } else {
                println!("Initialized catalog at {}", catalog_path.display());
            }
            println!("status=ok");
            println!("catalog_path={}", catalog_path.display());
            println!("records={}", count);
            if config_written {
                println!("config_path={}", config_path.display());
            }
        }
    }

    Ok(())
}
