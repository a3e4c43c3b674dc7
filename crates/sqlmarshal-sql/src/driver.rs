mod ansi;
pub use ansi::Ansi;

mod flavor;
pub use flavor::Flavor;

mod mysql;
pub use mysql::Mysql;

mod postgresql;
pub use postgresql::Postgresql;

mod sqlite;
pub use sqlite::Sqlite;

use sqlmarshal_core::{Error, Kind, Result};

use std::fmt::Debug;

/// Renders abstract kinds and key constraints as dialect specific SQL.
///
/// Drivers only need to know the kinds whose spelling differs from ANSI SQL:
/// returning `None` from [`define`](Driver::define) makes the serializer fall
/// back to the [`Ansi`] driver.
pub trait Driver: Debug + Send + Sync {
    /// Column definition `"<name> <TYPE>"`, or `None` if this driver has no
    /// type for `kind`.
    fn define(&self, kind: Kind, name: &str) -> Option<String>;

    /// Foreign key constraint linking `names` to `remote_names` of `remote_table`.
    ///
    /// Deletes and updates always cascade.
    fn define_fk(&self, remote_table: &str, names: &[String], remote_names: &[String]) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE CASCADE ON UPDATE CASCADE",
            names.join(", "),
            remote_table,
            remote_names.join(", ")
        )
    }

    /// Primary key constraint over `names`, or `None` when there is no key.
    fn define_pk(&self, names: &[String]) -> Option<String> {
        if names.is_empty() {
            return None;
        }

        Some(format!("PRIMARY KEY ({})", names.join(", ")))
    }
}

/// Defines a column with `driver`, falling back to the ANSI driver.
pub fn define(driver: &dyn Driver, kind: Kind, name: &str) -> Result<String> {
    driver
        .define(kind, name)
        .or_else(|| Ansi.define(kind, name))
        .ok_or_else(|| Error::undefined_sql_type(name, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Knows a single kind; everything else comes from the fallback.
    #[derive(Debug)]
    struct TextOnly;

    impl Driver for TextOnly {
        fn define(&self, kind: Kind, name: &str) -> Option<String> {
            match kind {
                Kind::Varchar => Some(format!("{name} TEXT")),
                _ => None,
            }
        }
    }

    #[test]
    fn driver_wins_over_fallback() {
        assert_eq!(define(&TextOnly, Kind::Varchar, "Name").unwrap(), "Name TEXT");
    }

    #[test]
    fn fallback_to_ansi() {
        assert_eq!(define(&TextOnly, Kind::BigInt, "ID").unwrap(), "ID BIGINT");
    }

    #[test]
    fn neither_defines() {
        let err = define(&TextOnly, Kind::ForeignKey, "Ref").unwrap_err();
        assert!(err.is_undefined_sql_type());

        let err = define(&TextOnly, Kind::Invalid, "Broken").unwrap_err();
        assert!(err.is_undefined_sql_type());
    }

    #[test]
    fn default_constraints() {
        let names = vec!["A_fk".to_string(), "B_fk".to_string()];
        let remote = vec!["A".to_string(), "B".to_string()];

        assert_eq!(
            TextOnly.define_fk("Pair", &names, &remote),
            "FOREIGN KEY (A_fk, B_fk) REFERENCES Pair (A, B) ON DELETE CASCADE ON UPDATE CASCADE"
        );
        assert_eq!(
            TextOnly.define_pk(&remote).as_deref(),
            Some("PRIMARY KEY (A, B)")
        );
        assert_eq!(TextOnly.define_pk(&[]), None);
    }
}
