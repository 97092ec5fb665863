pub mod check;
pub mod reset;

pub use check::handle_check;
pub use reset::handle_reset;
