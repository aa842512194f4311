use crate::errors::{BlumError, BlumResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tonlib_core::cell::{ArcCell, BagOfCells};

const BOC_MAGIC: [u8; 4] = [0xb5, 0xee, 0x9c, 0x72];
const CRC32C_LEN: u64 = 4;

/// Single-root BoC, no crc32c, standard base64
pub fn cell_to_boc_b64(cell: &ArcCell) -> BlumResult<String> {
    let boc = BagOfCells::new(&[cell.clone()]).serialize(false).map_err(BlumError::CellEncode)?;
    Ok(STANDARD.encode(boc))
}

/// Parses a base64 BoC received from the network and returns its single root.
///
/// The header is validated against the input length first, so a forged cell count can't
/// make the parser reserve memory the payload doesn't back.
pub fn cell_from_boc_b64(boc: &str) -> BlumResult<ArcCell> {
    let bytes = STANDARD.decode(boc)?;
    check_boc_header(&bytes)?;
    Ok(BagOfCells::parse(&bytes)?.single_root()?)
}

/// ```raw
/// serialized_boc#b5ee9c72 has_idx:(## 1) has_crc32c:(## 1) has_cache_bits:(## 1) flags:(## 2) { flags = 0 }
///   size:(## 3) { size <= 4 } off_bytes:(## 8) { off_bytes <= 8 }
///   cells:(##(size * 8)) roots:(##(size * 8)) { roots >= 1 } absent:(##(size * 8)) { roots + absent <= cells }
///   tot_cells_size:(##(off_bytes * 8))
///   root_list:(roots * ##(size * 8)) index:has_idx?(cells * ##(off_bytes * 8))
///   cell_data:(tot_cells_size * [ uint8 ]) crc32c:has_crc32c?uint32
/// ```
pub fn check_boc_header(bytes: &[u8]) -> BlumResult<()> {
    let mut reader = BocHeaderReader { bytes, pos: 0 };
    if reader.take(4)? != BOC_MAGIC.as_slice() {
        return Err(malformed("unsupported magic"));
    }
    let flags = reader.take(1)?[0];
    let has_idx = flags & 0x80 != 0;
    let has_crc32c = flags & 0x40 != 0;
    let size = (flags & 0x07) as usize;
    if !(1..=4).contains(&size) {
        return Err(malformed(format!("ref size {size} is out of 1..=4")));
    }
    let off_bytes = reader.take(1)?[0] as usize;
    if !(1..=8).contains(&off_bytes) {
        return Err(malformed(format!("offset size {off_bytes} is out of 1..=8")));
    }

    let cells = reader.read_uint(size)?;
    let roots = reader.read_uint(size)?;
    let absent = reader.read_uint(size)?;
    let tot_cells_size = reader.read_uint(off_bytes)?;
    if roots == 0 || roots.saturating_add(absent) > cells {
        return Err(malformed(format!("{roots} roots and {absent} absent of {cells} cells")));
    }
    // every cell carries at least its two descriptor bytes
    if cells.saturating_mul(2) > tot_cells_size {
        return Err(malformed(format!("{cells} cells can't fit into {tot_cells_size} bytes")));
    }

    let index_len = match has_idx {
        true => cells.checked_mul(off_bytes as u64),
        false => Some(0),
    };
    let expected_len = roots
        .checked_mul(size as u64)
        .zip(index_len)
        .and_then(|(root_list_len, index_len)| root_list_len.checked_add(index_len))
        .and_then(|len| len.checked_add(tot_cells_size))
        .and_then(|len| len.checked_add(if has_crc32c { CRC32C_LEN } else { 0 }));
    match expected_len {
        Some(len) if len <= reader.remaining() => Ok(()),
        _ => Err(malformed(format!("header declares more data than the {} bytes left", reader.remaining()))),
    }
}

fn malformed<T: ToString>(reason: T) -> BlumError { BlumError::MalformedBoc(reason.to_string()) }

struct BocHeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BocHeaderReader<'a> {
    fn take(&mut self, len: usize) -> BlumResult<&'a [u8]> {
        let Some(chunk) = self.bytes.get(self.pos..self.pos + len) else {
            return Err(malformed(format!("truncated header: {} bytes", self.bytes.len())));
        };
        self.pos += len;
        Ok(chunk)
    }

    fn read_uint(&mut self, len: usize) -> BlumResult<u64> {
        Ok(self.take(len)?.iter().fold(0u64, |acc, byte| (acc << 8) | *byte as u64))
    }

    fn remaining(&self) -> u64 { (self.bytes.len() - self.pos) as u64 }
}
