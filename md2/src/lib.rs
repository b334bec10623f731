//! An implementation of the [MD2][1] cryptographic hash algorithm.
//!
//! MD2 is cryptographically broken and must not be used for anything
//! security related; it is kept as a compact reference for block based
//! hashing on top of [`block_digest`].
//!
//! # Usage
//!
//! ```rust
//! use md2::{Md2, MessageDigest};
//! use hex_literal::hex;
//!
//! // create a Md2 hasher instance
//! let mut hasher = Md2::new();
//!
//! // process input message, possibly in several pieces
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16];
//! // the hasher is reset and can be reused right away
//! let result = hasher.digest();
//! assert_eq!(result[..], hex!("d9cce882ee690a5c1ce70beff3a78c77"));
//! assert_eq!(hasher.digest()[..], hex!("8350e5a3e24c153df2275c9f80692773"));
//! ```
//!
//! `Md2` also implements the RustCrypto [`Digest`](digest::Digest) trait.
//! `update` and `reset` exist on both traits, so code importing both has to
//! name the trait for those calls:
//!
//! ```rust
//! use md2::digest::Digest;
//! use md2::{Md2, MessageDigest};
//! use hex_literal::hex;
//!
//! let mut hasher = Md2::new();
//! MessageDigest::update(&mut hasher, b"abc");
//! let a = hasher.finalize_reset();
//! Digest::update(&mut hasher, b"abc");
//! assert_eq!(a, MessageDigest::digest(&mut hasher));
//! assert_eq!(a[..], hex!("da853b0d3f88d99b30283a69e6ded6bb"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/MD2_(hash_function)

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use block_digest::{self, Error, MessageDigest};
pub use digest;

use block_digest::{
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, FixedOutputCore, HashMarker, Output,
        OutputSizeUser, Reset, UpdateCore,
    },
    CoreWrapper,
};
use block_padding::{Padding, Pkcs7};
use digest::consts::U16;

mod consts;

/// Core MD2 hasher state.
#[derive(Clone)]
pub struct Md2Core {
    /// State, current block and their XOR.
    x: [u8; 48],
    checksum: Block<Self>,
    /// Last checksum byte, carried into the next block.
    checksum_carry: u8,
}

impl Md2Core {
    fn update_checksum(&mut self, block: &Block<Self>) {
        let mut l = self.checksum_carry;
        for (c, &b) in self.checksum.iter_mut().zip(block.iter()) {
            l = *c ^ consts::S[(b ^ l) as usize];
            *c = l;
        }
        self.checksum_carry = l;
    }

    fn compress(&mut self, block: &Block<Self>) {
        for j in 0..16 {
            self.x[16 + j] = block[j];
            self.x[32 + j] = self.x[j] ^ block[j];
        }

        let mut t = 0u8;
        for j in 0..18u8 {
            for k in 0..48 {
                t = self.x[k] ^ consts::S[t as usize];
                self.x[k] = t;
            }
            t = t.wrapping_add(j);
        }
    }
}

impl Default for Md2Core {
    #[inline]
    fn default() -> Self {
        Self {
            x: [0; 48],
            checksum: Default::default(),
            checksum_carry: 0,
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
    const NAME: &'static str = "MD2";
}

impl HashMarker for Md2Core {}

opaque_debug::implement!(Md2Core);

impl BlockSizeUser for Md2Core {
    type BlockSize = U16;
}

impl OutputSizeUser for Md2Core {
    type OutputSize = U16;
}

impl UpdateCore for Md2Core {
    #[inline]
    fn process_block(&mut self, block: &Block<Self>) {
        self.update_checksum(block);
        self.compress(block);
    }
}

impl FixedOutputCore for Md2Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let pos = buffer.get_pos();
        let block = buffer.pad_with_zeros();
        Pkcs7::pad(block, pos);
        self.process_block(block);
        // the checksum is compressed as one more block, without updating itself
        let checksum = self.checksum;
        self.compress(&checksum);
        out.copy_from_slice(&self.x[0..16]);
    }
}

/// MD2 hasher state.
pub type Md2 = CoreWrapper<Md2Core>;
