//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Argument parsing: flags, repeatable overrides, defaults
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion into command args

use std::path::PathBuf;

use super::*;
use crate::cli::commands::generate_command;
use crate::commands::generate::GenerateArgs;

fn params(args: &[&str]) -> GenerateParams {
    let m = generate_command()
        .try_get_matches_from(args)
        .unwrap_or_else(|e| panic!("{args:?} should parse: {e}"));
    GenerateParams::from_matches(&m)
}

#[test]
fn generate_defaults() {
    let params = params(&["generate", "schema.json"]);

    assert_eq!(params.schema_path, PathBuf::from("schema.json"));
    assert_eq!(params.root, None);
    assert_eq!(params.root_name, None);
    assert!(params.overrides.is_empty());
    assert!(!params.no_export);
    assert!(!params.no_builtin_overrides);
    assert_eq!(params.tag_key, "json");
    assert_eq!(params.output, None);
    assert!(!params.strict);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn generate_all_flags() {
    let params = params(&[
        "generate",
        "-",
        "--root",
        "[]models.Order",
        "--root-name",
        "Orders",
        "--no-export",
        "--no-builtin-overrides",
        "--tag-key",
        "yaml",
        "-o",
        "types.ts",
        "--strict",
        "--color",
        "never",
        "-vv",
    ]);

    assert_eq!(params.schema_path, PathBuf::from("-"));
    assert_eq!(params.root.as_deref(), Some("[]models.Order"));
    assert_eq!(params.root_name.as_deref(), Some("Orders"));
    assert!(params.no_export);
    assert!(params.no_builtin_overrides);
    assert_eq!(params.tag_key, "yaml");
    assert_eq!(params.output, Some(PathBuf::from("types.ts")));
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);
}

#[test]
fn overrides_are_repeatable_and_ordered() {
    let params = params(&[
        "generate",
        "schema.json",
        "--override",
        "time.Time=Date",
        "--override",
        "uuid.UUID = string",
        "--override",
        "Tagged=`${string}=${number}`",
    ]);

    assert_eq!(
        params.overrides,
        vec![
            ("time.Time".to_string(), "Date".to_string()),
            ("uuid.UUID".to_string(), " string".to_string()),
            ("Tagged".to_string(), "`${string}=${number}`".to_string()),
        ]
    );
}

#[test]
fn override_without_equals_is_rejected() {
    let result = generate_command().try_get_matches_from(["generate", "s.json", "--override", "int"]);
    assert!(result.is_err());

    let result = generate_command().try_get_matches_from(["generate", "s.json", "--override", "=x"]);
    assert!(result.is_err());
}

#[test]
fn schema_is_required() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn invalid_color_is_rejected() {
    let result =
        generate_command().try_get_matches_from(["generate", "s.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn params_into_args() {
    let params = params(&[
        "generate",
        "schema.json",
        "--no-export",
        "--color",
        "always",
    ]);
    let args: GenerateArgs = params.into();

    assert!(!args.export);
    assert!(args.builtin_overrides);
    assert!(args.color);
    assert_eq!(args.tag_key, "json");
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["typeport"]);
    assert!(result.is_err());

    let result = build_cli().try_get_matches_from(["typeport", "generate", "schema.json"]);
    assert!(result.is_ok());
}
