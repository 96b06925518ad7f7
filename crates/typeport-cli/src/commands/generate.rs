use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use typeport_compiler::typegen::typescript::{self, Config};
use typeport_core::{Schema, SchemaError};

pub struct GenerateArgs {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub root_name: Option<String>,
    pub overrides: Vec<(String, String)>,
    pub export: bool,
    pub builtin_overrides: bool,
    pub tag_key: String,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("no root type: pass --root or set \"root\" in the schema")]
    NoRoot,

    #[error("{0}")]
    Generate(#[from] typeport_compiler::Error),
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Generate and write declarations. Returns `false` when `--strict` fails.
fn execute(args: &GenerateArgs) -> Result<bool, GenerateError> {
    let source = load_schema(&args.schema_path)?;
    let mut schema = Schema::from_json(&source)?;

    let root = match &args.root {
        Some(expr) => schema.resolve(expr)?,
        None => schema.root().ok_or(GenerateError::NoRoot)?,
    };

    let mut config = Config::new()
        .export(args.export)
        .builtin_overrides(args.builtin_overrides)
        .tag_key(&args.tag_key)
        .overrides(
            schema
                .overrides()
                .iter()
                .map(|(ty, text)| (*ty, text.clone())),
        );
    for (expr, text) in &args.overrides {
        let ty = schema.resolve(expr)?;
        config = config.override_type(ty, text);
    }
    if let Some(name) = &args.root_name {
        config = config.root_name(name);
    }

    tracing::info!(root = %schema.graph().display(root), "generating declarations");
    let (output, diagnostics) = typescript::emit_with_config(schema.graph(), root, config)?;

    write_output(args.output.as_deref(), &output)?;

    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(args.color));
    }

    Ok(!(args.strict && diagnostics.has_warnings()))
}

fn load_schema(path: &Path) -> Result<String, GenerateError> {
    let read_error = |source: io::Error| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_error)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_error)
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), GenerateError> {
    match path {
        Some(path) => fs::write(path, output).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| GenerateError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            }),
    }
}
