//! Console output helpers shared by every command.

pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, found, header, no_results, querying, saved, success, timing, warn};
pub use progress::Spinner;
pub use table::{key_value_table, TableBuilder};
pub use theme::{theme, Theme};
