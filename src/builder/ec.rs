//! Block splitting (4.6) and per-block Reed-Solomon error correction (4.5).

use crate::common::galois::ec_codewords;
use crate::common::metadata::{ECLevel, Version};

/// Splits `data` (length `version.data_codewords(ec_level)`) into group-1 blocks
/// followed by group-2 blocks, then computes the EC codewords for each block.
pub fn ecc(data: &[u8], version: Version, ec_level: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
    let data_blocks = blockify(data, version, ec_level);
    let degree = version.ecc_per_block(ec_level);
    let ec_blocks = data_blocks.iter().map(|b| ec_codewords(b, degree)).collect();
    (data_blocks, ec_blocks)
}

pub fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
    let (g1_size, g1_blocks, g2_size, g2_blocks) = version.data_codewords_per_block(ec_level);

    let g1_total = g1_size * g1_blocks;
    let total = g1_total + g2_size * g2_blocks;
    debug_assert_eq!(total, data.len(), "data length doesn't match block layout");

    let mut blocks = Vec::with_capacity(g1_blocks + g2_blocks);
    blocks.extend(data[..g1_total].chunks(g1_size));
    if g2_size > 0 {
        blocks.extend(data[g1_total..].chunks(g2_size));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ec_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let expected_ecc = [b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"];
        let (_, ec) = ecc(msg, Version(1), ECLevel::M);
        assert_eq!(&*ec, expected_ecc);
    }

    #[test]
    fn test_add_ec_complex() {
        let msg = b"CUF\x86W&U\xc2w2\x06\x12\x06g&\xf6\xf6B\x07v\x86\xf2\x07&V\x16\xc6\xc7\x92\x06\
                    \xb6\xe6\xf7w2\x07v\x86W&R\x06\x86\x972\x07F\xf7vV\xc2\x06\x972\x10\xec\x11\xec\
                    \x11\xec\x11\xec";
        let expected_ec = [
            b"\xd5\xc7\x0b\x2d\x73\xf7\xf1\xdf\xe5\xf8\x9a\x75\x9a\x6f\x56\xa1\x6f\x27",
            b"\x57\xcc\x60\x3c\xca\xb6\x7c\x9d\xc8\x86\x1b\x81\xd1\x11\xa3\xa3\x78\x85",
            b"\x94\x74\xb1\xd4\x4c\x85\x4b\xf2\xee\x4c\xc3\xe6\xbd\x0a\x6c\xf0\xc0\x8d",
            b"\xeb\x9f\x05\xad\x18\x93\x3b\x21\x6a\x28\xff\xac\x52\x02\x83\x20\xb2\xec",
        ];
        let (_, ec) = ecc(msg, Version(5), ECLevel::Q);
        assert_eq!(&*ec, &expected_ec[..]);
    }

    #[test]
    fn test_blockify_block_counts() {
        let data = vec![0u8; Version(5).data_codewords(ECLevel::Q)];
        let blocks = blockify(&data, Version(5), ECLevel::Q);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].len(), 15);
        assert_eq!(blocks[2].len(), 16);
    }
}
