use anyhow::{Context, Result};

use crate::{args::List, index, misc::plural};

pub fn list(args: List) -> Result<()> {
    let segments = index::load(&args.index)
        .with_context(|| format!("Reading `{}`", args.index.to_string_lossy()))?;
    println!("[I] {} segment{}", segments.len(), plural(segments.len()));

    for (i, segment) in segments.iter().enumerate() {
        let glyph = if i + 1 == segments.len() { "└─" } else { "├─" };
        println!(
            " {glyph} {} @ {}..{} ({} byte{}, {} Hz, {} bit{})",
            segment.name,
            segment.start_byte,
            segment.end_byte(),
            segment.length,
            plural(segment.length),
            segment.sample_rate,
            segment.bit_depth,
            plural(segment.bit_depth)
        );
    }

    let total = segments.iter().map(|x| x.length as u64).sum::<u64>();
    println!("[I] {} byte{} of payload", total, plural(total));
    Ok(())
}
