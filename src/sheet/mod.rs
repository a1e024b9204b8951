//! Persistence of the monthly sheet as CSV: `Name,<date>,<date>...`
//! with `Y`, `N` or an empty cell.

mod store;

pub use store::{NAME_COLUMN, load_sheet, save_sheet, write_sheet};
