//! Initial array generation and validation

use super::errors::{SortError, SortResult};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Shuffled permutation of `1..=n`
pub fn generate_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SortResult<Vec<u32>> {
    if n == 0 {
        return Err(SortError::InvalidItemCount(n));
    }

    let upper = u32::try_from(n).map_err(|_| SortError::InvalidItemCount(n))?;
    let mut values: Vec<u32> = (1..=upper).collect();
    values.shuffle(rng);
    Ok(values)
}

/// Check that `values` holds every integer in `1..=len` exactly once
pub fn validate_permutation(values: &[u32]) -> SortResult<()> {
    let len = values.len();
    if len == 0 {
        return Err(SortError::InvalidItemCount(0));
    }

    let mut seen = FxHashSet::default();
    seen.reserve(len);

    for (index, &value) in values.iter().enumerate() {
        if value == 0 || value as usize > len {
            return Err(SortError::ValueOutOfRange { value, index, len });
        }
        if !seen.insert(value) {
            return Err(SortError::DuplicateValue { value, index });
        }
    }

    Ok(())
}
