//! Question sampling

use crate::core::question::Question;
use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `k` questions without replacement, uniformly over the bank.
///
/// The returned order is the presentation order. When the bank holds `k`
/// questions or fewer, the whole bank is returned in bank order.
///
/// The randomness source is supplied by the caller so tests can seed it.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use ryg_domain::{default_questions, sample_questions};
///
/// let bank = default_questions();
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(sample_questions(&bank, 5, &mut rng).len(), 5);
/// ```
pub fn sample_questions<R>(bank: &[Question], k: usize, rng: &mut R) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    if bank.len() <= k {
        return bank.to_vec();
    }

    let mut pool = bank.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, k);
    picked.to_vec()
}
