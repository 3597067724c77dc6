//! Uniform Fisher-Yates shuffling, the single randomization primitive used by
//! deck shuffling, quiz question order and option order.

use rand::Rng;
use rand::seq::SliceRandom;

pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a shuffled copy, leaving `items` untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
