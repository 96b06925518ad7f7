use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use indoc::indoc;

const SCHEMA: &str = indoc! {r#"
    {
      "root": "models.User",
      "types": [
        { "package": "models", "name": "User", "type": { "kind": "struct", "fields": [
          { "name": "ID", "type": "int" },
          { "name": "Name", "type": "string" },
          { "name": "Nickname", "type": "*string", "tag": "json:\"nickname,omitempty\"" },
          { "name": "Orders", "type": "[]models.Order", "tag": "json:\"orders\"" }
        ] } },
        { "package": "models", "name": "Order", "type": { "kind": "struct", "fields": [
          { "name": "Total", "type": "float64" },
          { "name": "PlacedAt", "type": "time.Time" }
        ] } },
        { "package": "time", "name": "Time", "type": "any", "marshaler": "json" }
      ]
    }
"#};

fn typeport(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typeport"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run typeport")
}

fn schema_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn generate_from_schema_root() {
    let schema = schema_file(SCHEMA);
    let output = typeport(&["generate", schema.path().to_str().unwrap()]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        indoc! {"
            export type User = {
                ID: number;
                Name: string;
                nickname?: string | null;
                orders: (Order)[];
            };
            export type Order = {
                Total: number;
                PlacedAt: Time;
            };
            export type Time = string;
        "}
    );
    assert_eq!(stderr(&output), "");
}

#[test]
fn generate_other_root_without_export() {
    let schema = schema_file(SCHEMA);
    let output = typeport(&[
        "generate",
        schema.path().to_str().unwrap(),
        "--root",
        "[]models.Order",
        "--root-name",
        "Orders",
        "--no-export",
        "--override",
        "time.Time=Date",
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        indoc! {"
            type Orders = (Order)[];
            type Order = {
                Total: number;
                PlacedAt: Time;
            };
            type Time = Date;
        "}
    );
}

#[test]
fn marshaler_warning_goes_to_stderr() {
    let schema = schema_file(SCHEMA);
    let output = typeport(&[
        "generate",
        schema.path().to_str().unwrap(),
        "--root",
        "time.Time",
        "--no-builtin-overrides",
        "--color",
        "never",
    ]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "export type Time = unknown;\n");
    assert!(
        stderr(&output).contains(
            "warning: time.Time implements json.Marshaler. The result may not be accurate"
        ),
        "{}",
        stderr(&output)
    );
}

#[test]
fn strict_fails_on_warnings_after_writing() {
    let schema = schema_file(SCHEMA);
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("types.ts");

    let output = typeport(&[
        "generate",
        schema.path().to_str().unwrap(),
        "--root",
        "time.Time",
        "--no-builtin-overrides",
        "--strict",
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "export type Time = unknown;\n"
    );
}

#[test]
fn reads_schema_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_typeport"))
        .args(["generate", "-", "--root", "map[string]models.Order", "--root-name", "ByID"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(SCHEMA.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(
        stdout(&output).starts_with("export type ByID = Record<string, Order>;\n"),
        "{}",
        stdout(&output)
    );
}

#[test]
fn anonymous_root_requires_name() {
    let schema = schema_file(SCHEMA);
    let output = typeport(&["generate", schema.path().to_str().unwrap(), "--root", "[]int"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "error: root type `[]int` has no name; set a root name to label its declaration\n"
    );
}

#[test]
fn unknown_root_type() {
    let schema = schema_file(SCHEMA);
    let output = typeport(&["generate", schema.path().to_str().unwrap(), "--root", "Missing"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: unknown type `Missing`\n");
}

#[test]
fn schema_without_root() {
    let schema = schema_file(r#"{ "types": [] }"#);
    let output = typeport(&["generate", schema.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: no root type"), "{}", stderr(&output));
}

#[test]
fn missing_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let output = typeport(&["generate", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: failed to read"), "{}", stderr(&output));
}
