//! FNV-1a hashing.
//!
//! The table's default hasher. FNV-1a folds each input byte into a running
//! 64-bit state with XOR followed by a multiply against a fixed prime, which
//! makes digests deterministic across runs, processes, and platforms —
//! placement in the slot array depends only on the key's value bytes as fed
//! through [`Hash`](core::hash::Hash), never on object identity.
//!
//! See <http://www.isthe.com/chongo/tech/comp/fnv/#FNV-1a>.

use core::hash::BuildHasher;
use core::hash::Hasher;

/// 64-bit FNV offset basis, the initial hasher state.
pub const FNV_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// 64-bit FNV prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// A [`Hasher`] implementing 64-bit FNV-1a.
///
/// # Examples
///
/// ```rust
/// use core::hash::Hasher;
///
/// use shift_hash::fnv::FnvHasher;
///
/// let mut hasher = FnvHasher::new();
/// hasher.write(b"foobar");
/// assert_eq!(hasher.finish(), 0x85944171F73967E8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// Creates a hasher initialized with the FNV offset basis.
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= u64::from(*byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }
}

/// A [`BuildHasher`] producing [`FnvHasher`]s.
///
/// This is the default hasher parameter of [`HashMap`](crate::HashMap) and
/// [`HashSet`](crate::HashSet). It carries no per-instance state, so two
/// tables built with it place equal keys identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}
