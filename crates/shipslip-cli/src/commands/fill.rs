use crate::commands::{print_json, Context};
use crate::input::{read_input, InputArgs};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shipslip_core::{ContactRecord, DisplayBoard, DisplayFields, FillTarget};
use tracing::debug;

#[derive(Debug, Args)]
pub struct FillArgs {
    /// Which pair the pasted text replaces
    #[arg(long, value_enum)]
    pub target: TargetArg,
    /// Current pickup contact ("name phone")
    #[arg(long, default_value = "")]
    pub pickup_contact: String,
    #[arg(long, default_value = "")]
    pub pickup_address: String,
    /// Current receiver contact ("name phone")
    #[arg(long, default_value = "")]
    pub receiver_contact: String,
    #[arg(long, default_value = "")]
    pub receiver_address: String,
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum TargetArg {
    Pickup,
    Receiver,
}

impl From<TargetArg> for FillTarget {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Pickup => FillTarget::Pickup,
            TargetArg::Receiver => FillTarget::Receiver,
        }
    }
}

#[derive(Debug, Serialize)]
struct FillOutput {
    target: FillTarget,
    changed: bool,
    #[serde(flatten)]
    board: DisplayBoard,
    extracted: ContactRecord,
}

pub fn fill(ctx: &Context<'_>, args: FillArgs) -> Result<()> {
    let target: FillTarget = args.target.into();
    let raw = read_input(&args.input)?;
    let record = ctx.extractor.extract(&raw);

    let mut board = DisplayBoard {
        pickup: DisplayFields::new(args.pickup_contact, args.pickup_address),
        receiver: DisplayFields::new(args.receiver_contact, args.receiver_address),
    };
    let changed = board.apply(target, &record);
    debug!(target = target.as_str(), changed, "display fields applied");

    if ctx.json {
        return print_json(&FillOutput {
            target,
            changed,
            board,
            extracted: record,
        });
    }

    for pair in [FillTarget::Pickup, FillTarget::Receiver] {
        let fields = board.fields(pair);
        println!("{} contact: {}", pair.as_str(), fields.contact);
        println!("{} address: {}", pair.as_str(), fields.address);
    }
    if !changed {
        println!("unchanged");
    }
    Ok(())
}
