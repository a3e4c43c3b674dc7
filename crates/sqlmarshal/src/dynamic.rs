//! Tables and rows described at runtime rather than by a Rust type.
//!
//! A [`Table`] tokenizes to the same schema a derived model would, so the
//! statements crafted from it do not depend on where the schema came from.

mod row;
pub use row::{Cell, Row};

mod table;
pub use table::{ColumnDef, Table};
