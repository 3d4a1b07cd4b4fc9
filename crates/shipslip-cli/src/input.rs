use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

use crate::error::invalid_input;

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Pasted text; read from --file or stdin when omitted
    pub text: Option<String>,
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        debug!(path = %path.display(), "reading input file");
        return fs::read_to_string(path)
            .map_err(|err| invalid_input(format!("cannot read {}: {}", path.display(), err)));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(invalid_input(
            "no input: pass TEXT, --file, or pipe text on stdin",
        ));
    }
    let mut raw = String::new();
    stdin
        .lock()
        .read_to_string(&mut raw)
        .with_context(|| "read stdin")?;
    Ok(raw)
}
