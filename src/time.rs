//! Millisecond tick type with wraparound-safe arithmetic.
//!
//! The board clock is a free-running 32-bit millisecond counter, so it
//! overflows roughly every 49.7 days.
//! Elapsed time is always computed with `wrapping_sub`, which stays correct
//! across one overflow as long as the measured interval itself fits in
//! 32 bits.

/// A reading of the monotonic millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Millis(pub u32);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, modulo 2^32.
    #[inline]
    pub const fn elapsed_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Advance by `ms`, wrapping at the counter width.
    #[inline]
    pub const fn wrapping_add(self, ms: u32) -> Millis {
        Millis(self.0.wrapping_add(ms))
    }
}
