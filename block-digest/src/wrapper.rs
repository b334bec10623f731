use core::{fmt, slice};
use digest::typenum::{IsLess, Le, NonZero, Unsigned, U256};
use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};

use crate::core_api::{AlgorithmName, BlockSizeUser, Buffer, FixedOutputCore, UpdateCore};
use crate::MessageDigest;

/// Hasher built from an algorithm core and an eager block buffer.
///
/// The buffer forwards every complete block to the core exactly once and in
/// input order; the core only ever sees a partial block during finalization.
pub struct CoreWrapper<T>
where
    T: UpdateCore,
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    core: T,
    buffer: Buffer<T>,
}

impl<T: UpdateCore + Default> CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    /// Create a hasher in its initial state.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: UpdateCore> CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    /// Number of input bytes waiting for their block to complete.
    #[inline]
    pub fn pending(&self) -> usize {
        self.buffer.get_pos()
    }

    #[inline]
    fn absorb(&mut self, input: &[u8]) {
        let Self { core, buffer } = self;
        buffer.digest_blocks(input, |blocks| {
            for block in blocks {
                core.process_block(block);
            }
        });
    }
}

impl<T: FixedOutputCore + AlgorithmName + Reset> CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    fn finalize_core(&mut self, out: &mut Output<T>) {
        tracing::trace!(algorithm = T::NAME, pending = self.buffer.get_pos(), "finalizing");
        let Self { core, buffer } = self;
        core.finalize_fixed_core(buffer, out);
        self.reset_state();
    }

    #[inline]
    fn reset_state(&mut self) {
        self.core.reset();
        self.buffer.reset();
    }
}

impl<T: FixedOutputCore + AlgorithmName + Reset> MessageDigest for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn name(&self) -> &'static str {
        T::NAME
    }

    #[inline]
    fn block_len(&self) -> usize {
        <T as BlockSizeUser>::BlockSize::USIZE
    }

    #[inline]
    fn reset(&mut self) -> &mut Self {
        self.reset_state();
        self
    }

    #[inline]
    fn update_byte(&mut self, byte: u8) -> &mut Self {
        self.absorb(slice::from_ref(&byte));
        self
    }

    #[inline]
    fn update(&mut self, input: &[u8]) -> &mut Self {
        self.absorb(input);
        self
    }

    #[inline]
    fn digest(&mut self) -> Output<Self> {
        let mut out = Output::<Self>::default();
        self.finalize_core(&mut out);
        out
    }
}

impl<T: UpdateCore + Default> Default for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn default() -> Self {
        Self {
            core: T::default(),
            buffer: Default::default(),
        }
    }
}

impl<T: UpdateCore + Clone> Clone for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: UpdateCore + AlgorithmName> fmt::Display for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::NAME)
    }
}

impl<T: UpdateCore + fmt::Debug> fmt::Debug for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoreWrapper")
            .field("core", &self.core)
            .field("pending", &self.buffer.get_pos())
            .finish()
    }
}

impl<T: FixedOutputCore> OutputSizeUser for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    type OutputSize = <T as OutputSizeUser>::OutputSize;
}

impl<T: UpdateCore> Update for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.absorb(data);
    }
}

impl<T: FixedOutputCore + AlgorithmName + Reset> FixedOutput for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn finalize_into(mut self, out: &mut Output<Self>) {
        self.finalize_core(out);
    }
}

impl<T: FixedOutputCore + AlgorithmName + Reset> FixedOutputReset for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        self.finalize_core(out);
    }
}

impl<T: FixedOutputCore + AlgorithmName + Reset> Reset for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn reset(&mut self) {
        self.reset_state();
    }
}

impl<T: UpdateCore + HashMarker> HashMarker for CoreWrapper<T>
where
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_api::Block;
    use block_padding::{Padding, Pkcs7};
    use digest::consts::{U1, U4};

    /// Toy core: output is the wrapping sum of all bytes of all blocks,
    /// including the padded final block.
    #[derive(Clone, Default, Debug)]
    struct SumCore {
        sum: u8,
        blocks: usize,
    }

    impl BlockSizeUser for SumCore {
        type BlockSize = U4;
    }

    impl OutputSizeUser for SumCore {
        type OutputSize = U1;
    }

    impl UpdateCore for SumCore {
        fn process_block(&mut self, block: &Block<Self>) {
            self.blocks += 1;
            for &b in block.iter() {
                self.sum = self.sum.wrapping_add(b);
            }
        }
    }

    impl FixedOutputCore for SumCore {
        fn finalize_fixed_core(
            &mut self,
            buffer: &mut Buffer<Self>,
            out: &mut Output<Self>,
        ) {
            let pos = buffer.get_pos();
            let block = buffer.pad_with_zeros();
            Pkcs7::pad(block, pos);
            self.process_block(block);
            out[0] = self.sum;
        }
    }

    impl HashMarker for SumCore {}

    impl AlgorithmName for SumCore {
        const NAME: &'static str = "Sum";
    }

    impl Reset for SumCore {
        fn reset(&mut self) {
            *self = Default::default();
        }
    }

    type Sum = CoreWrapper<SumCore>;

    #[test]
    fn identity() {
        let h = Sum::new();
        assert_eq!(h.name(), "Sum");
        assert_eq!(h.block_len(), 4);
        assert_eq!(h.output_len(), 1);
        assert_eq!(std::format!("{}", h), "Sum");
    }

    #[test]
    fn blocks_reach_core_once() {
        let mut h = Sum::new();
        MessageDigest::update(&mut h, &[1, 2, 3]);
        assert_eq!(h.core.blocks, 0);
        MessageDigest::update(&mut h, &[4, 5]);
        assert_eq!(h.core.blocks, 1);
        assert_eq!(h.pending(), 1);
        h.update_byte(6).update_byte(7).update_byte(8);
        assert_eq!(h.core.blocks, 2);
        assert_eq!(h.pending(), 0);
    }

    #[test]
    fn digest_pads_and_resets() {
        let mut h = Sum::new();
        MessageDigest::update(&mut h, &[1, 2, 3, 4, 5]);
        // 1 + 2 + 3 + 4 + 5 + 3 * 3
        assert_eq!(h.digest()[0], 24);
        assert_eq!(h.pending(), 0);
        assert_eq!(h.core.blocks, 0);
        // empty message: one block of four 4s
        assert_eq!(h.digest()[0], 16);
    }

    #[test]
    fn rejected_range_leaves_state() {
        let mut h = Sum::new();
        MessageDigest::update(&mut h, &[1, 2]);
        assert!(h.update_range(&[1, 2, 3], 2, 2).is_err());
        assert_eq!(h.update_opt(None, 0, 0).err(), Some(crate::Error::NullInput));
        assert_eq!(h.pending(), 2);
        h.update_range(&[9, 3, 4, 9], 1, 2).unwrap();
        assert_eq!(h.pending(), 0);
        assert_eq!(h.core.blocks, 1);
    }

    #[test]
    fn digest_into_checks_length() {
        let mut h = Sum::new();
        MessageDigest::update(&mut h, &[1]);
        let mut short = [0u8; 0];
        assert_eq!(
            h.digest_into(&mut short),
            Err(crate::Error::InvalidOutputLen {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(h.pending(), 1);
        let mut out = [0u8; 1];
        h.digest_into(&mut out).unwrap();
        assert_eq!(out[0], 1 + 3 * 3);
    }

    #[test]
    fn digest_traits_agree() {
        use digest::Digest;

        let expected = MessageDigest::digest(&mut Sum::new().with_input(b"hello"));
        let mut h = <Sum as Digest>::new();
        Digest::update(&mut h, b"he");
        Digest::update(&mut h, b"llo");
        assert_eq!(Digest::finalize_reset(&mut h), expected);
        assert_eq!(Digest::finalize(h)[0], 16);
    }
}
