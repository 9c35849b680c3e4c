use std::{fs::File, io::Read, path::Path};

use anyhow::{anyhow, Context, Result};

use crate::{
    args::Info,
    header::{WavHeader, HEADER_LEN},
    misc::plural,
};

pub fn info(args: Info) -> Result<()> {
    let mut failed = 0_usize;
    for path in &args.files {
        if let Err(e) = inspect(path) {
            println!(" └─ [!] {e:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(anyhow!("{} file{} could not be read", failed, plural(failed)));
    }

    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    println!("[*] {}", path.to_string_lossy());

    let mut raw = [0; HEADER_LEN as usize];
    let mut file = File::open(path).context("Opening file")?;
    let size = file.metadata()?.len();
    file.read_exact(&mut raw).context("Reading header")?;

    let header = WavHeader::parse(&raw).map_err(|e| anyhow!(e))?;
    let format = header.format;
    println!(
        " ├─ RIFF size {} ({} on disk), `{}` size {}",
        header.riff_size,
        size,
        header.tag(),
        header.data_size
    );
    println!(
        " ├─ Format {}, {} channel{}, {} Hz, {} bytes/s, align {}, {} bit{}",
        format.format_tag,
        format.channels,
        plural(format.channels),
        format.sample_rate,
        format.byte_rate,
        format.block_align,
        format.bits_per_sample,
        plural(format.bits_per_sample)
    );

    let reader = hound::WavReader::open(path).context("Decoding with hound")?;
    let spec = reader.spec();
    println!(
        " └─ {} sample{} ({:.2}s)",
        reader.len(),
        plural(reader.len()),
        reader.duration() as f32 / spec.sample_rate as f32
    );

    Ok(())
}
