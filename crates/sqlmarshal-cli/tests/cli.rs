use clap::Parser;
use pretty_assertions::assert_eq;
use sqlmarshal::Flavor;
use sqlmarshal_cli::{Cli, Config};

use std::path::PathBuf;

/// Writes `contents` to a file named `name` under a directory private to
/// `test`.
fn fixture(test: &str, name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(test);
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const SCHEMA_JSON: &str = r#"{
    "ID": { "type": "small_int", "primary": true },
    "Name": { "type": "varchar" }
}"#;

const ROW_JSON: &str = r#"{ "ID": 1, "Name": "a" }"#;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let config = cli.config()?;
    cli.run(&config)
}

#[test]
fn create() {
    let schema = fixture("create", "X.json", SCHEMA_JSON);

    let sql = run(&["sqlmarshal", "create", "--schema", schema.to_str().unwrap()]).unwrap();
    assert_eq!(sql, "CREATE TABLE X (ID SMALLINT, Name VARCHAR, PRIMARY KEY (ID));");
}

#[test]
fn create_with_dialect_and_name() {
    let schema = fixture("create_with_dialect_and_name", "schema.toml", r#"
        ID = { type = "small_int", primary = true }
        Name = { type = "varchar" }
    "#);

    let sql = run(&[
        "sqlmarshal",
        "create",
        "--schema",
        schema.to_str().unwrap(),
        "--name",
        "people",
        "--dialect",
        "sqlite",
    ])
    .unwrap();
    assert_eq!(sql, "CREATE TABLE people (ID INTEGER, Name TEXT, PRIMARY KEY (ID));");
}

#[test]
fn insert_and_update() {
    let schema = fixture("insert_and_update", "X.json", SCHEMA_JSON);
    let row = fixture("insert_and_update", "row.json", ROW_JSON);
    let schema = schema.to_str().unwrap();
    let row = row.to_str().unwrap();

    assert_eq!(
        run(&["sqlmarshal", "insert", "--schema", schema, "--row", row]).unwrap(),
        "INSERT INTO X (ID, Name) VALUES (1, \"a\");"
    );
    assert_eq!(
        run(&["sqlmarshal", "update", "--schema", schema, "--row", row]).unwrap(),
        "UPDATE X SET Name=\"a\" WHERE ID=1;"
    );
}

#[test]
fn config_file_and_overrides() {
    let config = fixture(
        "config_file_and_overrides",
        "sqlmarshal.toml",
        "dialect = \"mysql\"\nlog_level = \"info\"\n",
    );
    let config = config.to_str().unwrap();

    let cli = Cli::try_parse_from(["sqlmarshal", "--config", config, "create", "--schema", "x.json"]).unwrap();
    assert_eq!(
        cli.config().unwrap(),
        Config::new().dialect(Flavor::Mysql).log_level("info")
    );

    let cli = Cli::try_parse_from([
        "sqlmarshal",
        "create",
        "--schema",
        "x.json",
        "--config",
        config,
        "--dialect",
        "postgres",
        "--log-level",
        "trace",
    ])
    .unwrap();
    assert_eq!(
        cli.config().unwrap(),
        Config::new().dialect(Flavor::Postgresql).log_level("trace")
    );
}

#[test]
fn errors_name_the_file() {
    let schema = fixture("errors_name_the_file", "broken.json", r#"{ "ID": { "type": "blob" } }"#);

    let err = run(&["sqlmarshal", "create", "--schema", schema.to_str().unwrap()]).unwrap_err();
    let message = format!("{err:#}");

    assert!(message.starts_with("parsing schema file "), "{message}");
    assert!(message.contains("invalid definition for column `ID`"), "{message}");
}

#[test]
fn unknown_dialect() {
    assert!(Cli::try_parse_from(["sqlmarshal", "create", "--schema", "x.json", "--dialect", "oracle"]).is_err());
}
