//! Interleaving of data and EC blocks, plus trailing remainder bits (4.7).

use crate::common::codec::BitStream;
use crate::common::metadata::Version;

fn interleave<T: Copy>(blocks: &[&[T]]) -> Vec<T> {
    let max_len = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let mut out = Vec::with_capacity(blocks.iter().map(|b| b.len()).sum());
    for i in 0..max_len {
        for block in blocks {
            if let Some(&v) = block.get(i) {
                out.push(v);
            }
        }
    }
    out
}

/// Interleaves data blocks, then EC blocks, and appends the version's remainder bits.
pub fn interleave_into_stream(data_blocks: &[&[u8]], ec_blocks: &[Vec<u8>], version: Version) -> BitStream {
    let data_refs: Vec<&[u8]> = data_blocks.to_vec();
    let ec_refs: Vec<&[u8]> = ec_blocks.iter().map(Vec::as_slice).collect();

    let data_stream = interleave(&data_refs);
    let ec_stream = interleave(&ec_refs);

    let mut stream = BitStream::new();
    for b in data_stream.iter().chain(ec_stream.iter()) {
        stream.push_bits(*b as u32, 8);
    }
    stream.push_bits(0, version.remainder_bits());
    stream
}
