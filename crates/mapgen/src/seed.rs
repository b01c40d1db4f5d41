//! Fresh seeds for configurations that do not pin one.
//!
//! Wall-clock nanoseconds, the process id, and a per-process call count are folded into one word
//! and finalized with SplitMix64.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

static SEED_CALLS: AtomicU64 = AtomicU64::new(0);

/// Seed used when a [`crate::GenerationConfig`] is built without one.
pub fn generate_runtime_seed() -> u64 {
    let call = SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    splitmix_finalize(fold_entropy(wall_clock_nanos(), process::id(), call))
}

fn wall_clock_nanos() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_nanos())
}

/// Call counts are spread by the golden gamma so consecutive calls differ in many bits.
fn fold_entropy(nanos: u128, pid: u32, call: u64) -> u64 {
    let (low, high) = (nanos as u64, (nanos >> 64) as u64);
    low ^ high ^ u64::from(pid).rotate_left(32) ^ call.wrapping_mul(GOLDEN_GAMMA)
}

/// SplitMix64 output function. Bijective on `u64`.
fn splitmix_finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
