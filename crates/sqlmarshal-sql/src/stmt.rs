mod create_table;
pub use create_table::CreateTable;

mod fields_with_value;
pub use fields_with_value::{FieldWithValue, FieldsWithValue};

mod insert;
pub use insert::Insert;

mod update;
pub use update::Update;

mod values;
pub use values::fields_and_values;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Insert(Insert),
    Update(Update),
}

impl Statement {
    /// Table the statement applies to.
    pub fn table(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}
