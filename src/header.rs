use std::{
    io::{Read, Seek, SeekFrom},
    path::Path,
};

use crate::{
    error::{Error, Result},
    index::SegmentDescriptor,
    parser::BinParser,
};

pub const HEADER_LEN: u32 = 44;
/// Where the reused window starts in the source: past `RIFF`, its size and `WAVE`.
pub const FMT_WINDOW_OFFSET: u64 = 16;
pub const FMT_WINDOW_LEN: usize = 24;
/// Bytes of the source's own header that sit in front of the first segment.
pub const ORIGINAL_HEADER_LEN: u64 = 38;

const RIFF: &[u8; 4] = b"RIFF";
const WAVE_FMT: &[u8; 8] = b"WAVEfmt ";
const DATA: &[u8; 4] = b"data";

/// The format sub-chunk written by [`HeaderPolicy::Fixed`].
/// Does not follow the descriptor's own sample rate or bit depth.
pub const FIXED_FORMAT: FormatChunk = FormatChunk {
    chunk_size: 16,
    format_tag: 1,
    channels: 1,
    sample_rate: 11_051,
    byte_rate: 11_051,
    block_align: 1,
    bits_per_sample: 8,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    ReuseOriginal,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatChunk {
    pub chunk_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

#[derive(Debug, Clone)]
pub enum HeaderStrategy {
    ReuseOriginal { fmt: [u8; FMT_WINDOW_LEN] },
    Fixed,
}

#[derive(Debug)]
pub struct WavHeader {
    pub riff_size: u32,
    pub format: FormatChunk,
    pub data_tag: [u8; 4],
    pub data_size: u32,
}

impl FormatChunk {
    fn encode(&self) -> [u8; 20] {
        let mut out = [0; 20];

        out[0x00..0x04].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[0x04..0x06].copy_from_slice(&self.format_tag.to_le_bytes());
        out[0x06..0x08].copy_from_slice(&self.channels.to_le_bytes());
        out[0x08..0x0C].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[0x0C..0x10].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[0x10..0x12].copy_from_slice(&self.block_align.to_le_bytes());
        out[0x12..0x14].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        out
    }

    fn parse(parser: &mut BinParser<'_>) -> Option<Self> {
        Some(Self {
            chunk_size: parser.read_u32()?,
            format_tag: parser.read_u16()?,
            channels: parser.read_u16()?,
            sample_rate: parser.read_u32()?,
            byte_rate: parser.read_u32()?,
            block_align: parser.read_u16()?,
            bits_per_sample: parser.read_u16()?,
        })
    }
}

impl HeaderStrategy {
    pub fn prepare<R: Read + Seek>(policy: HeaderPolicy, source: &mut R, path: &Path) -> Result<Self> {
        match policy {
            HeaderPolicy::ReuseOriginal => {
                let mut fmt = [0; FMT_WINDOW_LEN];
                source
                    .seek(SeekFrom::Start(FMT_WINDOW_OFFSET))
                    .and_then(|_| source.read_exact(&mut fmt))
                    .map_err(Error::io(path))?;
                Ok(Self::ReuseOriginal { fmt })
            }
            HeaderPolicy::Fixed => Ok(Self::Fixed),
        }
    }

    pub fn payload_start(&self, position: usize, segment: &SegmentDescriptor) -> u64 {
        match self {
            // The first segment is preceded by the source's own header.
            Self::ReuseOriginal { .. } if position == 0 => {
                segment.start_byte as u64 + ORIGINAL_HEADER_LEN
            }
            _ => segment.start_byte as u64,
        }
    }

    /// Size fields wrap when `length` is smaller than the header under `ReuseOriginal`.
    pub fn build(&self, segment: &SegmentDescriptor) -> Vec<u8> {
        let length = segment.length;
        let mut out = Vec::with_capacity(HEADER_LEN as usize);

        match self {
            Self::ReuseOriginal { fmt } => {
                out.extend_from_slice(RIFF);
                out.extend_from_slice(&length.wrapping_sub(8).to_le_bytes());
                out.extend_from_slice(WAVE_FMT);
                out.extend_from_slice(fmt);

                let so_far = out.len() as u32;
                out.extend_from_slice(&length.wrapping_sub(so_far + 4).to_le_bytes());
            }
            Self::Fixed => {
                out.extend_from_slice(RIFF);
                out.extend_from_slice(&length.to_le_bytes());
                out.extend_from_slice(WAVE_FMT);
                out.extend_from_slice(&FIXED_FORMAT.encode());
                out.extend_from_slice(DATA);
                out.extend_from_slice(&length.to_le_bytes());
            }
        }

        debug_assert_eq!(out.len(), HEADER_LEN as usize);
        out
    }
}

impl WavHeader {
    pub fn parse(data: &[u8]) -> std::result::Result<Self, String> {
        let mut parser = BinParser::new(data);
        let short = || format!("header shorter than {HEADER_LEN} bytes");

        if &parser.read_array::<4>().ok_or_else(short)? != RIFF {
            return Err("missing RIFF tag".into());
        }
        let riff_size = parser.read_u32().ok_or_else(short)?;
        if &parser.read_array::<8>().ok_or_else(short)? != WAVE_FMT {
            return Err("missing WAVEfmt tag".into());
        }
        let format = FormatChunk::parse(&mut parser).ok_or_else(short)?;
        let data_tag = parser.read_array::<4>().ok_or_else(short)?;
        let data_size = parser.read_u32().ok_or_else(short)?;

        Ok(Self {
            riff_size,
            format,
            data_tag,
            data_size,
        })
    }

    pub fn tag(&self) -> String {
        self.data_tag.iter().map(|&c| c as char).collect()
    }
}
