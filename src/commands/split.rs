use anyhow::{Context, Result};

use crate::{args::Split, extract, misc::plural};

pub fn split(args: Split) -> Result<()> {
    println!(
        "[*] Splitting `{}` into `{}` using `{}` ({} headers)",
        args.source.to_string_lossy(),
        args.output.to_string_lossy(),
        args.index.to_string_lossy(),
        args.policy
    );

    let written = extract::split(&args.index, &args.source, &args.output, args.policy.into())
        .context("Splitting failed")?;

    println!("[*] Done! Wrote {} file{}", written.len(), plural(written.len()));
    Ok(())
}
