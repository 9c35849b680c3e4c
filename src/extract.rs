use std::{
    fs::File,
    io::{BufWriter, Read, Seek, SeekFrom, Write},
    path::{Component, Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    header::{HeaderPolicy, HeaderStrategy},
    index::{self, SegmentDescriptor},
};

/// Carves segments out of a source blob and writes each as a standalone WAV.
pub struct Extractor {
    source: File,
    source_path: PathBuf,
    output_dir: PathBuf,
    strategy: HeaderStrategy,
}

impl Extractor {
    pub fn open(source_path: &Path, output_dir: &Path, policy: HeaderPolicy) -> Result<Self> {
        let mut source = File::open(source_path).map_err(Error::io(source_path))?;
        let strategy = HeaderStrategy::prepare(policy, &mut source, source_path)?;

        Ok(Self {
            source,
            source_path: source_path.to_owned(),
            output_dir: output_dir.to_owned(),
            strategy,
        })
    }

    /// `position` is the segment's place in the index.
    pub fn extract(&mut self, position: usize, segment: &SegmentDescriptor) -> Result<PathBuf> {
        let header = self.strategy.build(segment);

        let start = self.strategy.payload_start(position, segment);
        let mut payload = vec![0; segment.length as usize];
        self.source
            .seek(SeekFrom::Start(start))
            .and_then(|_| self.source.read_exact(&mut payload))
            .map_err(Error::io(&self.source_path))?;

        let path = self.output_dir.join(relative(&segment.name));
        let write = |path: &Path| -> std::io::Result<()> {
            let mut out = BufWriter::new(File::create(path)?);
            out.write_all(&header)?;
            out.write_all(&payload)?;
            out.flush()
        };
        write(&path).map_err(Error::io(&path))?;

        Ok(path)
    }

    pub fn run(&mut self, segments: &[SegmentDescriptor]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(segments.len());
        for (i, segment) in segments.iter().enumerate() {
            let glyph = if i + 1 == segments.len() { "└─" } else { "├─" };
            println!(" {glyph} Splitting {}", segment.name);
            written.push(self.extract(i, segment)?);
        }

        Ok(written)
    }
}

/// Keeps a descriptor name under the output directory: roots, prefixes
/// and `.`/`..` components are dropped before joining.
fn relative(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

pub fn split(
    index_path: &Path,
    source: &Path,
    output_dir: &Path,
    policy: HeaderPolicy,
) -> Result<Vec<PathBuf>> {
    for (value, name) in [
        (index_path, "index path"),
        (source, "source path"),
        (output_dir, "output directory"),
    ] {
        if value.as_os_str().is_empty() {
            return Err(Error::Argument(name));
        }
    }

    let segments = index::load(index_path)?;
    if segments.is_empty() {
        File::open(source).map_err(Error::io(source))?;
        return Ok(Vec::new());
    }

    let mut extractor = Extractor::open(source, output_dir, policy)?;
    extractor.run(&segments)
}
