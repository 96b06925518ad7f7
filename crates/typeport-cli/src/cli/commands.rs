//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeport")
        .about("Generate TypeScript declarations from host type graphs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
}

/// Generate declarations for a schema root.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript declarations from a schema file")
        .override_usage(
            "\
  typeport generate <SCHEMA> [--root <TYPE>]
  typeport generate - < schema.json",
        )
        .after_help(
            r#"EXAMPLES:
  typeport generate schema.json                         # root from the schema
  typeport generate schema.json --root models.Order     # pick another root
  typeport generate schema.json --root '[]models.Order' --root-name Orders
  typeport generate schema.json --override 'uuid.UUID=string'
  typeport generate schema.json -o types.ts --strict"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(root_name_arg())
        .arg(override_arg())
        .arg(no_export_arg())
        .arg(no_builtin_overrides_arg())
        .arg(tag_key_arg())
        .arg(output_file_arg())
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}
