use digest::generic_array::typenum::Unsigned;
use digest::{Output, OutputSizeUser};

use crate::error::{check_range, Error};

/// Incremental message digest.
///
/// Input may be supplied in any number of calls; only the concatenation of
/// all bytes seen since the last [`reset`](MessageDigest::reset) or
/// [`digest`](MessageDigest::digest) determines the result.
///
/// `update` and `reset` share their names with methods of the RustCrypto
/// [`Update`](digest::Update), [`Reset`](digest::Reset) and
/// [`Digest`](digest::Digest) traits. Code importing both this trait and one
/// of those has to call them with a qualified path, e.g.
/// `MessageDigest::update(&mut hasher, data)`.
pub trait MessageDigest: OutputSizeUser {
    /// Algorithm name.
    fn name(&self) -> &'static str;

    /// Length of the algorithm's input blocks in bytes.
    fn block_len(&self) -> usize;

    /// Length of the produced digest in bytes.
    #[inline]
    fn output_len(&self) -> usize {
        Self::OutputSize::USIZE
    }

    /// Return to the initial state, discarding all pending input.
    fn reset(&mut self) -> &mut Self;

    /// Process a single byte.
    fn update_byte(&mut self, byte: u8) -> &mut Self;

    /// Process all of `input`.
    fn update(&mut self, input: &[u8]) -> &mut Self;

    /// Process `len` bytes of `input` starting at `offset`.
    ///
    /// The range is validated before anything is processed; on error the
    /// hasher is left untouched.
    fn update_range(&mut self, input: &[u8], offset: usize, len: usize) -> Result<&mut Self, Error> {
        match check_range(input.len(), offset, len) {
            Ok(end) => Ok(self.update(&input[offset..end])),
            Err(err) => {
                tracing::debug!(algorithm = self.name(), offset, len, input_len = input.len(), "rejected update");
                Err(err)
            }
        }
    }

    /// Same as [`update_range`](MessageDigest::update_range) for an input
    /// which may be missing.
    fn update_opt(&mut self, input: Option<&[u8]>, offset: usize, len: usize) -> Result<&mut Self, Error> {
        match input {
            Some(input) => self.update_range(input, offset, len),
            None => {
                tracing::debug!(algorithm = self.name(), "rejected update without input");
                Err(Error::NullInput)
            }
        }
    }

    /// Finalize the computation, return the digest and reset the hasher.
    fn digest(&mut self) -> Output<Self>;

    /// Finalize into `out`, which must be exactly
    /// [`output_len`](MessageDigest::output_len) bytes long, and reset.
    ///
    /// A wrongly sized `out` is rejected before finalization, so pending
    /// input is kept.
    fn digest_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let expected = self.output_len();
        if out.len() != expected {
            tracing::debug!(algorithm = self.name(), expected, actual = out.len(), "rejected output buffer");
            return Err(Error::InvalidOutputLen {
                expected,
                actual: out.len(),
            });
        }
        out.copy_from_slice(&self.digest());
        Ok(())
    }

    /// Process `input` and return the hasher, for chained construction.
    #[inline]
    fn with_input(mut self, input: impl AsRef<[u8]>) -> Self
    where
        Self: Sized,
    {
        self.update(input.as_ref());
        self
    }

    /// Compute the digest of `input` in one go.
    #[inline]
    fn hash(input: impl AsRef<[u8]>) -> Output<Self>
    where
        Self: Default + Sized,
    {
        Self::default().with_input(input).digest()
    }
}
