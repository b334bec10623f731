//! Incremental, block-buffered message digest framework.
//!
//! An algorithm is written as a *core*: a small state type which consumes
//! complete blocks ([`core_api::UpdateCore`]) and knows how to pad and
//! finalize the trailing partial block ([`core_api::FixedOutputCore`]).
//! [`CoreWrapper`] pairs such a core with an eager [`block_buffer`] and turns
//! it into a ready to use hasher implementing [`MessageDigest`], so input can
//! be fed in arbitrarily sized pieces without changing the result.
//!
//! Wrapped hashers also implement the RustCrypto [`digest`] traits and can be
//! used wherever a [`digest::Digest`] is expected.

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub use block_buffer;
pub use digest;

pub mod core_api;

mod error;
mod message_digest;
mod wrapper;

pub use crate::error::Error;
pub use crate::message_digest::MessageDigest;
pub use crate::wrapper::CoreWrapper;
