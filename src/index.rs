use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::{Error, Result};

/// One row of an IDX file: where a sound lives in the source blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDescriptor {
    pub name: String,
    pub start_byte: u32,
    pub length: u32,
    pub sample_rate: u32,
    pub bit_depth: u32,
}

impl SegmentDescriptor {
    /// Parses `name startByte length sampleRate bitDepth`, split on single spaces.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let fields = line.split(' ').collect::<Vec<_>>();
        if fields.len() != 5 {
            return Err(format!("expected 5 fields, found {}", fields.len()));
        }

        let number = |i: usize, what: &str| {
            fields[i]
                .parse::<u32>()
                .map_err(|e| format!("invalid {what} `{}`: {e}", fields[i]))
        };

        Ok(Self {
            name: fields[0].to_owned(),
            start_byte: number(1, "start byte")?,
            length: number(2, "length")?,
            sample_rate: number(3, "sample rate")?,
            bit_depth: number(4, "bit depth")?,
        })
    }

    pub fn end_byte(&self) -> u64 {
        self.start_byte as u64 + self.length as u64
    }
}

pub fn load(path: &Path) -> Result<Vec<SegmentDescriptor>> {
    let file = File::open(path).map_err(Error::io(path))?;
    parse(BufReader::new(file), path)
}

pub fn parse(reader: impl BufRead, path: &Path) -> Result<Vec<SegmentDescriptor>> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::io(path))?;
        let row = SegmentDescriptor::parse(&line).map_err(|reason| Error::Parse {
            line: i + 1,
            content: line.clone(),
            reason,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor, path::Path};

    use super::{load, parse, SegmentDescriptor};
    use crate::error::Error;

    fn parse_str(text: &str) -> crate::error::Result<Vec<SegmentDescriptor>> {
        parse(Cursor::new(text), Path::new("test.idx"))
    }

    #[test]
    fn parses_rows_in_order() {
        let rows = parse_str("clip1 0 100 11025 8\nclip2 100 50 22050 16\r\n").unwrap();

        assert_eq!(
            rows,
            vec![
                SegmentDescriptor {
                    name: "clip1".into(),
                    start_byte: 0,
                    length: 100,
                    sample_rate: 11025,
                    bit_depth: 8,
                },
                SegmentDescriptor {
                    name: "clip2".into(),
                    start_byte: 100,
                    length: 50,
                    sample_rate: 22050,
                    bit_depth: 16,
                },
            ]
        );
        assert_eq!(rows[1].end_byte(), 150);
    }

    #[test]
    fn empty_index() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn short_line() {
        match parse_str("foo 10 20") {
            Err(Error::Parse { line, content, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(content, "foo 10 20");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_lines() {
        for bad in [
            "a.wav 0 10 11025 8\n\nb.wav 10 10 11025 8",
            "a.wav 0 10 11025 8 extra",
            "a.wav 0  10 11025 8",
            "a.wav -1 10 11025 8",
            "a.wav 0 ten 11025 8",
            "a.wav 0 4294967296 11025 8",
        ] {
            assert!(
                matches!(parse_str(bad), Err(Error::Parse { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn blank_line_reports_position() {
        match parse_str("a.wav 0 10 11025 8\n\n") {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn accepts_u32_max() {
        let rows = parse_str("big 4294967295 0 0 0").unwrap();
        assert_eq!(rows[0].start_byte, u32::MAX);
        assert_eq!(rows[0].end_byte(), u32::MAX as u64);
    }

    #[test]
    fn load_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sounds.idx");
        fs::write(&path, "one.wav 0 200 11025 8\ntwo.wav 238 64 11025 8\n").unwrap();

        let first = load(&path).unwrap();
        let second = load(&path).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.idx")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
