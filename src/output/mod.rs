//! Output formatting for CIDR sets.

mod terminal;

pub use terminal::{format_rows, format_summary, print_set};
