use pretty_assertions::assert_eq;
use sqlmarshal_core::{schema::TokenizedField, Kind, Record, Tokenized, Value};
use sqlmarshal_sql::{Serializer, Statement};

/// Record backed by name/value pairs.
struct Row<'a>(Vec<(&'static str, Value<'a>)>);

impl Record for Row<'_> {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }
}

fn x() -> Tokenized {
    Tokenized::new(
        "X",
        vec![
            TokenizedField::scalar("ID", Kind::SmallInt).primary_key(true),
            TokenizedField::scalar("Name", Kind::Varchar),
        ],
    )
}

fn reference() -> Tokenized {
    Tokenized::new(
        "Reference",
        vec![
            TokenizedField::scalar("DifferentNameID", Kind::SmallInt).primary_key(true),
            TokenizedField::scalar("Name", Kind::Varchar),
        ],
    )
}

fn pair() -> Tokenized {
    Tokenized::new(
        "Pair",
        vec![
            TokenizedField::scalar("A", Kind::BigInt).primary_key(true),
            TokenizedField::scalar("B", Kind::Varchar).primary_key(true),
            TokenizedField::scalar("Label", Kind::Varchar),
        ],
    )
}

fn sql(stmt: Result<Statement, sqlmarshal_core::Error>) -> String {
    Serializer::ansi().serialize(&stmt.unwrap()).unwrap()
}

#[test]
fn create_table() {
    assert_eq!(
        sql(Statement::create_table(&x())),
        "CREATE TABLE X (ID SMALLINT, Name VARCHAR, PRIMARY KEY (ID));"
    );
}

#[test]
fn create_table_with_foreign_key() {
    let schema = Tokenized::new(
        "Referencing",
        vec![
            TokenizedField::scalar("ID", Kind::SmallInt).primary_key(true),
            TokenizedField::foreign_key("Ref", reference()),
            TokenizedField::scalar("Active", Kind::Int),
        ],
    );

    assert_eq!(
        sql(Statement::create_table(&schema)),
        "CREATE TABLE Referencing (ID SMALLINT, Ref_DifferentNameID_fk SMALLINT, Active INT, \
         FOREIGN KEY (Ref_DifferentNameID_fk) REFERENCES Reference (DifferentNameID) ON DELETE CASCADE ON UPDATE CASCADE, \
         PRIMARY KEY (ID));"
    );
}

#[test]
fn create_table_without_primary_key() {
    let schema = Tokenized::new("Log", vec![TokenizedField::scalar("Line", Kind::Varchar)]);

    assert_eq!(
        sql(Statement::create_table(&schema)),
        "CREATE TABLE Log (Line VARCHAR);"
    );
}

#[test]
fn create_table_with_surrogate_reference() {
    let unkeyed = Tokenized::new("Unkeyed", vec![TokenizedField::scalar("Name", Kind::Varchar)]);
    let schema = Tokenized::new("Holder", vec![TokenizedField::foreign_key("Of", unkeyed)]);

    assert_eq!(
        sql(Statement::create_table(&schema)),
        "CREATE TABLE Holder (Of BIGINT, \
         FOREIGN KEY (Of) REFERENCES Unkeyed (_ID) ON DELETE CASCADE ON UPDATE CASCADE);"
    );
}

#[test]
fn create_table_is_deterministic() {
    let schema = Tokenized::new(
        "Referencing",
        vec![
            TokenizedField::foreign_key("Left", pair()).primary_key(true),
            TokenizedField::foreign_key("Right", reference()),
        ],
    );

    let first = sql(Statement::create_table(&schema));
    for _ in 0..10 {
        assert_eq!(first, sql(Statement::create_table(&schema)));
    }
}

#[test]
fn create_empty_table() {
    let schema = Tokenized::new("Nothing", vec![]);

    let err = Statement::create_table(&schema).unwrap_err();
    assert!(err.is_empty_statement());
    assert_eq!(
        err.to_string(),
        "CREATE statement for table `Nothing` would be empty: no columns"
    );
}

#[test]
fn insert() {
    let row = Row(vec![("ID", Value::I64(1)), ("Name", Value::String("a"))]);

    assert_eq!(
        sql(Statement::insert(&x(), &row)),
        "INSERT INTO X (ID, Name) VALUES (1, \"a\");"
    );
}

#[test]
fn insert_skips_values_without_literal() {
    let row = Row(vec![("ID", Value::I64(1)), ("Name", Value::Unsupported)]);

    assert_eq!(
        sql(Statement::insert(&x(), &row)),
        "INSERT INTO X (ID) VALUES (1);"
    );
}

#[test]
fn insert_nothing() {
    let row = Row(vec![]);

    let err = Statement::insert(&x(), &row).unwrap_err();
    assert!(err.is_empty_statement());
}

#[test]
fn update_by_primary_key() {
    let row = Row(vec![("ID", Value::I64(1)), ("Name", Value::String("a"))]);

    assert_eq!(
        sql(Statement::update_by_primary_key(&x(), &row)),
        "UPDATE X SET Name=\"a\" WHERE ID=1;"
    );
}

#[test]
fn update_without_primary_key() {
    let schema = Tokenized::new("Log", vec![TokenizedField::scalar("Line", Kind::Varchar)]);
    let row = Row(vec![("Line", Value::String("hello"))]);

    assert_eq!(
        sql(Statement::insert(&schema, &row)),
        "INSERT INTO Log (Line) VALUES (\"hello\");"
    );
    assert_eq!(
        sql(Statement::update_by_primary_key(&schema, &row)),
        "UPDATE Log SET Line=\"hello\" WHERE ;"
    );
}

#[test]
fn update_with_only_key_columns() {
    let schema = Tokenized::new(
        "Key",
        vec![TokenizedField::scalar("ID", Kind::BigInt).primary_key(true)],
    );
    let row = Row(vec![("ID", Value::I64(9))]);

    assert_eq!(
        sql(Statement::update_by_primary_key(&schema, &row)),
        "UPDATE Key SET  WHERE ID=9;"
    );
}

#[test]
fn composite_foreign_key_as_primary_key() {
    let schema = Tokenized::new(
        "Child",
        vec![
            TokenizedField::foreign_key("Parent", pair()).primary_key(true),
            TokenizedField::scalar("Weight", Kind::Double),
        ],
    );

    assert_eq!(
        sql(Statement::create_table(&schema)),
        "CREATE TABLE Child (Parent_A_fk BIGINT, Parent_B_fk VARCHAR, Weight DOUBLE, \
         FOREIGN KEY (Parent_A_fk, Parent_B_fk) REFERENCES Pair (A, B) ON DELETE CASCADE ON UPDATE CASCADE, \
         PRIMARY KEY (Parent_A_fk, Parent_B_fk));"
    );

    let parent = Row(vec![
        ("A", Value::I64(3)),
        ("B", Value::String("b")),
        ("Label", Value::String("unused")),
    ]);
    let child = Row(vec![
        ("Parent", Value::Record(&parent)),
        ("Weight", Value::F64(1.5)),
    ]);

    assert_eq!(
        sql(Statement::insert(&schema, &child)),
        "INSERT INTO Child (Parent_A_fk, Parent_B_fk, Weight) VALUES (3, \"b\", 1.500000);"
    );
    assert_eq!(
        sql(Statement::update_by_primary_key(&schema, &child)),
        "UPDATE Child SET Weight=1.500000 WHERE Parent_A_fk=3 AND Parent_B_fk=\"b\";"
    );
}

#[test]
fn insert_columns_split_into_update_clauses() {
    let schema = Tokenized::new(
        "Order",
        vec![
            TokenizedField::scalar("Region", Kind::Varchar).primary_key(true),
            TokenizedField::scalar("Note", Kind::Varchar),
            TokenizedField::scalar("Number", Kind::BigInt).primary_key(true),
            TokenizedField::foreign_key("Ref", reference()),
        ],
    );

    let reference = Row(vec![("DifferentNameID", Value::I64(4))]);
    let row = Row(vec![
        ("Region", Value::String("eu")),
        ("Note", Value::String("n")),
        ("Number", Value::U64(12)),
        ("Ref", Value::Record(&reference)),
    ]);

    let Statement::Insert(insert) = Statement::insert(&schema, &row).unwrap() else {
        panic!("expected an insert");
    };
    let Statement::Update(update) = Statement::update_by_primary_key(&schema, &row).unwrap()
    else {
        panic!("expected an update");
    };

    let mut inserted: Vec<_> = insert.values.fields().collect();
    let mut updated: Vec<_> = update
        .assignments
        .fields()
        .chain(update.conditions.fields())
        .collect();
    inserted.sort();
    updated.sort();

    assert_eq!(inserted, updated);
    assert_eq!(
        update.conditions.fields().collect::<Vec<_>>(),
        ["Region", "Number"]
    );
}
