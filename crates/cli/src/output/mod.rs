pub mod banner;
pub mod confirm;
mod format;
pub mod spinner;
mod table;
pub mod theme;

pub use format::{print_error, print_info, print_json, print_success, OutputMode};
pub use table::build_table;
