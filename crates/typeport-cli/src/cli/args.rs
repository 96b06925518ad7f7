//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file (positional, `-` for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Schema file (`-` reads stdin)")
}

/// Root type expression (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .value_name("TYPE")
        .help("Root type, e.g. `models.User` or `[]models.Order` (default: schema root)")
}

/// Root declaration label (--root-name).
pub fn root_name_arg() -> Arg {
    Arg::new("root_name")
        .long("root-name")
        .value_name("NAME")
        .help("Name of the root declaration (required for anonymous roots)")
}

/// Literal type override (--override, repeatable).
pub fn override_arg() -> Arg {
    Arg::new("override")
        .long("override")
        .value_name("TYPE=TEXT")
        .action(ArgAction::Append)
        .value_parser(parse_override)
        .help("Render TYPE as TEXT (later entries win)")
}

/// Don't export types (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export types")
}

/// Disable well-known overrides (--no-builtin-overrides).
pub fn no_builtin_overrides_arg() -> Arg {
    Arg::new("no_builtin_overrides")
        .long("no-builtin-overrides")
        .action(ArgAction::SetTrue)
        .help("Don't render `time.Time` as `string` by default")
}

/// Struct tag key (--tag-key).
pub fn tag_key_arg() -> Arg {
    Arg::new("tag_key")
        .long("tag-key")
        .value_name("KEY")
        .default_value("json")
        .help("Struct tag key used for field names and optionality")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

fn parse_override(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((ty, text)) if !ty.trim().is_empty() => {
            Ok((ty.trim().to_string(), text.to_string()))
        }
        _ => Err(format!("expected TYPE=TEXT, got `{value}`")),
    }
}
