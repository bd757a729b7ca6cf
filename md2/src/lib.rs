//! An implementation of the [MD2][1] cryptographic hash algorithm.
//!
//! MD2 is broken and must not be used where collision or preimage
//! resistance matters. It is provided for interoperability with legacy
//! formats only.
//!
//! # Usage
//!
//! ```rust
//! use md2::{Md2, Digest};
//! use hex_literal::hex;
//!
//! // create a Md2 hasher instance
//! let mut hasher = Md2::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("d9cce882ee690a5c1ce70beff3a78c77"));
//! ```
//!
//! Input may be supplied in chunks of any size, and a hasher can be reused
//! after `finalize_reset`:
//!
//! ```rust
//! use md2::{Md2, Digest};
//! use hex_literal::hex;
//!
//! let mut hasher = Md2::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//! assert_eq!(hasher.finalize_reset()[..], hex!("ab4f496bfb2a530b219ff33031fe06b0"));
//!
//! hasher.update(b"abc");
//! assert_eq!(hasher.finalize_reset()[..], hex!("da853b0d3f88d99b30283a69e6ded6bb"));
//!
//! // one-shot
//! assert_eq!(Md2::digest(b"")[..], hex!("8350e5a3e24c153df2275c9f80692773"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD2_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    consts::U16,
    core_api::{
        AlgorithmName, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    generic_array::GenericArray,
    HashMarker, Output, Reset,
};
#[cfg(feature = "oid")]
use digest::const_oid::{AssociatedOid, ObjectIdentifier};

mod compress;
mod consts;
use compress::{accumulate, compress, STATE_LEN};

type Block = GenericArray<u8, U16>;

/// Core MD2 hasher state.
///
/// The first 16 bytes of `state` hold the chaining value, which after the
/// final compression is the digest.
#[derive(Clone)]
pub struct Md2Core {
    state: [u8; STATE_LEN],
    checksum: Block,
}

impl Md2Core {
    #[inline]
    fn process_block(&mut self, block: &Block) {
        accumulate(&mut self.checksum, block);
        compress(&mut self.state, block);
    }
}

impl HashMarker for Md2Core {}

impl BlockSizeUser for Md2Core {
    type BlockSize = U16;
}

impl BufferKindUser for Md2Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md2Core {
    type OutputSize = U16;
}

impl UpdateCore for Md2Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.process_block(block)
        }
    }
}

impl FixedOutputCore for Md2Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // Eager buffers never hold a full block, so `rem` is in 1..=16
        let pos = buffer.get_pos();
        let rem = buffer.remaining() as u8;
        let block = buffer.pad_with_zeros();
        block[pos..].iter_mut().for_each(|b| *b = rem);
        self.process_block(block);

        let checksum = self.checksum;
        compress(&mut self.state, &checksum);
        out.copy_from_slice(&self.state[..16]);
    }
}

impl Default for Md2Core {
    #[inline]
    fn default() -> Self {
        Self {
            state: [0; STATE_LEN],
            checksum: Default::default(),
        }
    }
}

impl Reset for Md2Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md2Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md2")
    }
}

opaque_debug::implement!(Md2Core);

#[cfg(feature = "oid")]
impl AssociatedOid for Md2Core {
    const OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.2.2");
}

/// MD2 hasher state.
pub type Md2 = CoreWrapper<Md2Core>;
