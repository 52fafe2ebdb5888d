use core::fmt;

use super::{OutputSize, MAX_DIGEST_BYTES};
use crate::ct::ct_eq;
use crate::error::ParameterError;
use crate::keccak::Sponge;

/// Finished digest: up to 64 bytes held inline.
///
/// Equality is constant time.
#[derive(Clone, Copy)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_BYTES],
    len: usize,
}

impl Digest {
    /// Squeeze `size.digest_len()` bytes out of a padded sponge.
    pub(crate) fn squeeze(sponge: &Sponge, size: OutputSize) -> Self {
        let len = size.digest_len();
        let mut bytes = [0u8; MAX_DIGEST_BYTES];
        sponge.squeeze(&mut bytes[..len]);
        Self { bytes, len }
    }

    /// Digest bytes in squeeze order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Length in bytes (`bits / 8`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for digests produced by this crate.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Copy the leading `out.len()` digest bytes into `out`.
    ///
    /// Returns the number of bytes written. Asking for more bytes than the
    /// digest holds is an error and leaves `out` untouched.
    pub fn truncate_into(&self, out: &mut [u8]) -> Result<usize, ParameterError> {
        if out.len() > self.len {
            return Err(ParameterError::OutputTooLarge {
                requested: out.len(),
                max: self.len,
            });
        }
        out.copy_from_slice(&self.bytes[..out.len()]);
        Ok(out.len())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for Digest {}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}
