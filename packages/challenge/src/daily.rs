//! Deterministic daily challenge selection.
//!
//! The calendar date is hashed with SHA-256 to seed a `SplitMix64`
//! generator, which drives a partial Fisher-Yates shuffle over the catalog.
//! Every caller asking for the same date and count gets the same list.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::{Catalog, Challenge};

/// Picks `count` distinct challenges for `date`.
///
/// `count` is capped at the catalog size. The first `n` picks for a date
/// do not depend on how many were requested, so asking for more only
/// appends.
#[must_use]
pub fn daily_challenges(catalog: &Catalog, date: NaiveDate, count: usize) -> Vec<&Challenge> {
    let challenges = catalog.challenges();
    let count = count.min(challenges.len());

    let mut order: Vec<usize> = (0..challenges.len()).collect();
    let mut rng = SplitMix64::new(date_seed(date));

    for i in 0..count {
        let remaining = (order.len() - i) as u64;
        #[allow(clippy::cast_possible_truncation)]
        let j = i + (rng.next_u64() % remaining) as usize;
        order.swap(i, j);
    }

    order[..count].iter().map(|&idx| &challenges[idx]).collect()
}

/// Seed derived from the ISO-8601 date string.
fn date_seed(date: NaiveDate) -> u64 {
    let digest = Sha256::digest(date.format("%Y-%m-%d").to_string().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
