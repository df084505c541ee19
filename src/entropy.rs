//! Randomness source selection and the sampling capability.
//!
//! The sampler only needs "fill N u32 slots with uniform values", expressed
//! by [`RandomSource`]. Production picks the OS CSPRNG when it works and
//! degrades to a time-seeded PRNG when it doesn't; the degraded mode is
//! weaker and is logged, never silently claimed secure. Tests inject a
//! seeded generator through the same trait.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, SmallRng};
use rand::{Error, RngCore, SeedableRng};

/// Capability to fill a slice with uniformly distributed u32 values.
pub trait RandomSource {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<(), Error>;
}

/// Any `RngCore` satisfies the capability, one 4-byte draw per slot.
impl<R: RngCore> RandomSource for R {
    fn fill_u32(&mut self, dest: &mut [u32]) -> Result<(), Error> {
        let mut bytes = [0u8; 4];
        for slot in dest.iter_mut() {
            self.try_fill_bytes(&mut bytes)?;
            *slot = u32::from_le_bytes(bytes);
        }
        Ok(())
    }
}

/// The active randomness source: OS CSPRNG, or a weaker fallback.
pub enum EntropySource {
    /// Operating-system CSPRNG.
    Os(OsRng),
    /// Time+pid-seeded PRNG. NOT cryptographically secure; used only when
    /// the OS source is unavailable.
    Fallback(SmallRng),
}

impl EntropySource {
    /// Try the OS source and pick it when it works, otherwise fall back,
    /// logging the degraded mode.
    pub fn init() -> Self {
        let mut check = [0u8; 8];
        match OsRng.try_fill_bytes(&mut check) {
            Ok(()) => EntropySource::Os(OsRng),
            Err(e) => {
                log::warn!(
                    "OS random source unavailable ({e}); \
                     falling back to time-seeded PRNG (not cryptographically secure)"
                );
                EntropySource::Fallback(SmallRng::seed_from_u64(fallback_seed()))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntropySource::Os(_) => "OS CSPRNG",
            EntropySource::Fallback(_) => "time-seeded PRNG (weak)",
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, EntropySource::Os(_))
    }
}

impl RngCore for EntropySource {
    fn next_u32(&mut self) -> u32 {
        match self {
            EntropySource::Os(r) => r.next_u32(),
            EntropySource::Fallback(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            EntropySource::Os(r) => r.next_u64(),
            EntropySource::Fallback(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            EntropySource::Os(r) => r.fill_bytes(dest),
            EntropySource::Fallback(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        match self {
            EntropySource::Os(r) => r.try_fill_bytes(dest),
            EntropySource::Fallback(r) => r.try_fill_bytes(dest),
        }
    }
}

fn fallback_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
        .unwrap_or(0);
    nanos ^ ((process::id() as u64) << 32)
}
