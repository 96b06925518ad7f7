mod cli;
mod commands;

use cli::{GenerateParams, build_cli};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            init_tracing(params.verbose);
            commands::generate::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Internal logs go to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "error",
        1 => "typeport=debug,typeport_compiler=debug,typeport_core=debug",
        _ => "typeport=trace,typeport_compiler=trace,typeport_core=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
