/*!
  Usage: `isalut [definition.json]`. Without a definition file the built-in GR8CPU-R3
  instruction set is used. Tables are written to stdout, logs to stderr (`RUST_LOG` controls
  the level).
*/

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use isalut::{generate, IsaDefinition, IsaError};

fn load(path: Option<&str>) -> Result<IsaDefinition, IsaError> {
  match path {
    Some(path) => {
      tracing::info!(path, "loading ISA definition");
      IsaDefinition::load(path)
    }
    None => {
      tracing::info!("no ISA definition given, using the built-in GR8CPU-R3");
      IsaDefinition::gr8cpu_r3()
    }
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    )
    .with_writer(std::io::stderr)
    .init();

  let path = env::args().nth(1);
  let result = load(path.as_deref()).and_then(|isa| generate(&isa));

  match result {
    Ok(artifacts) => {
      print!("{}", artifacts);
    }
    Err(e) => {
      tracing::error!(error = %e, "failed to generate lookup tables");
      process::exit(1);
    }
  }
}
