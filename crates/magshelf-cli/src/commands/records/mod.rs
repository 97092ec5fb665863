//! Handlers for single-record commands and `list`.

mod add;
mod delete;
mod edit;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;

use crate::errors::CliError;

/// Error for an id with no record, pointing at `list`.
pub(crate) fn record_not_found(id: i64) -> CliError {
    CliError::not_found(
        format!("Record {} not found", id),
        "Hint: Run `magshelf list` to find record IDs.",
    )
}
