//! Confirmation prompts for destructive commands.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm};

/// Prompt for confirmation.
///
/// Fails when stdin is not a terminal; callers skip the prompt in that case.
pub fn prompt_confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive confirmation required. Use --yes or run on a TTY."
        ));
    }

    let theme = ColorfulTheme::default();
    let result = Confirm::with_theme(&theme)
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    Ok(result)
}
