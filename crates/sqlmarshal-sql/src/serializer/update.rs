use super::{Comma, Delimited, Formatter, ToSql};

use crate::stmt::Update;

impl ToSql for &Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let assignments = Comma(self.assignments.pairs("="));
        let conditions = Delimited(self.conditions.pairs("="), " AND ");

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " conditions);
    }
}
