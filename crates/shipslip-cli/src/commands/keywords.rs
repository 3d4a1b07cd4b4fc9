use crate::commands::{print_json, Context};
use anyhow::Result;
use shipslip_core::KeywordKind;

const KINDS: [KeywordKind; 4] = [
    KeywordKind::Name,
    KeywordKind::Phone,
    KeywordKind::Address,
    KeywordKind::StopWords,
];

pub fn show_keywords(ctx: &Context<'_>) -> Result<()> {
    let lists = &ctx.config.keywords;
    if ctx.json {
        return print_json(lists);
    }

    for kind in KINDS {
        println!("{}: {}", kind, lists.get(kind).join(", "));
    }
    Ok(())
}
