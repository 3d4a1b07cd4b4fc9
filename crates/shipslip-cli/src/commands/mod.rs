use anyhow::Result;
use serde::Serialize;
use shipslip_config::AppConfig;
use shipslip_core::Extractor;
use std::io::{self, Write};

pub mod extract;
pub mod fill;
pub mod keywords;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub extractor: &'a Extractor,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
