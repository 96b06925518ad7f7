//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::generate::GenerateArgs;

#[derive(Debug)]
pub struct GenerateParams {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub root_name: Option<String>,
    pub overrides: Vec<(String, String)>,
    pub no_export: bool,
    pub no_builtin_overrides: bool,
    pub tag_key: String,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            schema_path: m
                .get_one::<PathBuf>("schema_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            root: m.get_one::<String>("root").cloned(),
            root_name: m.get_one::<String>("root_name").cloned(),

            // Generation options
            overrides: m
                .get_many::<(String, String)>("override")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            no_export: m.get_flag("no_export"),
            no_builtin_overrides: m.get_flag("no_builtin_overrides"),
            tag_key: m
                .get_one::<String>("tag_key")
                .cloned()
                .unwrap_or_else(|| "json".to_string()),

            // Output
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            schema_path: p.schema_path,
            root: p.root,
            root_name: p.root_name,
            overrides: p.overrides,
            export: !p.no_export,
            builtin_overrides: !p.no_builtin_overrides,
            tag_key: p.tag_key,
            output: p.output,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
