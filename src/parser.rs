/// Little-endian cursor over a byte slice. Reads past the end yield `None`.
pub struct BinParser<'a> {
    raw: &'a [u8],
    idx: usize,
}

impl<'a> BinParser<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw, idx: 0 }
    }

    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let val = self.raw.get(self.idx..self.idx + N)?.try_into().ok()?;
        self.idx += N;
        Some(val)
    }

    pub fn read_u16(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Option<u32> {
        self.read_array().map(u32::from_le_bytes)
    }
}
