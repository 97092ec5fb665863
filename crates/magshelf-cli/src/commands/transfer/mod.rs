//! Bulk transfer commands: `import`, `restore`, `export`.
//!
//! `import` and `restore` replace the whole catalog, so both confirm
//! first and write a safety snapshot of the current contents.

mod export;
mod import;
mod restore;
mod snapshot;

pub use export::handle_export;
pub use import::handle_import;
pub use restore::handle_restore;
pub use snapshot::{confirm_destructive, print_snapshot, write_safety_snapshot};
