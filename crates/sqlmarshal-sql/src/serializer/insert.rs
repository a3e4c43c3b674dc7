use super::{Comma, Formatter, ToSql};

use crate::stmt::Insert;

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = Comma(self.values.fields());
        let values = Comma(self.values.values());

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}
