//! Spreadsheet export of audit views.

pub mod error;
pub mod table;
pub mod xlsx;

pub use error::{ExportError, Result};
pub use table::{Cell, ExportTable};
pub use xlsx::{MAX_COLUMN_WIDTH, column_width, to_xlsx_bytes, write_xlsx};
