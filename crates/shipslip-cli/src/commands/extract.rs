use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::input::{read_input, InputArgs};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Fail when nothing could be extracted
    #[arg(long)]
    pub strict: bool,
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let record = ctx.extractor.extract(&raw);
    if args.strict && record.is_empty() {
        return Err(invalid_input("no contact details found"));
    }

    if ctx.json {
        return print_json(&record);
    }

    println!("name: {}", record.name);
    println!("phone: {}", record.phone);
    println!("address: {}", record.address);
    Ok(())
}
