use crate::{consts::S, Block};

/// Size of the working state: the chaining value followed by the copied
/// block and its XOR with the chaining value.
pub(crate) const STATE_LEN: usize = 48;

#[inline(always)]
pub(crate) fn substitute(x: u8) -> u8 {
    S[x as usize]
}

/// Fold one message block into the running checksum.
///
/// Each byte depends on the one updated just before it, starting from the
/// last checksum byte left by the previous block.
pub(crate) fn accumulate(checksum: &mut Block, block: &Block) {
    let mut l = checksum[15];
    for j in 0..16 {
        checksum[j] ^= substitute(block[j] ^ l);
        l = checksum[j];
    }
}

/// Mix one block into the 48-byte state over 18 rounds.
pub(crate) fn compress(x: &mut [u8; STATE_LEN], block: &Block) {
    for j in 0..16 {
        x[16 + j] = block[j];
        x[32 + j] = block[j] ^ x[j];
    }

    let mut t = 0u8;
    for j in 0..18u8 {
        for k in 0..STATE_LEN {
            x[k] ^= substitute(t);
            t = x[k];
        }
        t = t.wrapping_add(j);
    }
}
