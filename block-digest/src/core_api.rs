//! Low-level traits implemented by algorithm cores.
//!
//! A core never sees partial input: the [`Buffer`] held by
//! [`CoreWrapper`](crate::CoreWrapper) takes care of that and hands over one
//! complete block at a time.

pub use block_buffer::Eager;
pub use digest::core_api::{Block, BlockSizeUser};
pub use digest::{HashMarker, Output, OutputSizeUser, Reset};

use block_buffer::BlockBuffer;
use digest::typenum::{IsLess, Le, NonZero, U256};

/// Buffer type used by the wrapper of a core.
///
/// It is eager: a block is passed on as soon as it is complete, so the
/// number of pending bytes is always less than the block size.
pub type Buffer<S> = BlockBuffer<<S as BlockSizeUser>::BlockSize, Eager>;

/// Types which consume data in blocks.
pub trait UpdateCore: BlockSizeUser {
    /// Process one complete block of input.
    fn process_block(&mut self, block: &Block<Self>);
}

/// Cores which produce a fixed size output.
pub trait FixedOutputCore: UpdateCore + OutputSizeUser
where
    Self::BlockSize: IsLess<U256>,
    Le<Self::BlockSize, U256>: NonZero,
{
    /// Pad the pending bytes held by `buffer`, run the final transformations
    /// and write the result into `out`.
    ///
    /// The wrapper resets both the core and the buffer afterwards, so
    /// implementations are free to leave them in any state.
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>);
}

/// Human readable name of an algorithm.
pub trait AlgorithmName {
    /// Algorithm name, e.g. `"MD2"`.
    const NAME: &'static str;
}
