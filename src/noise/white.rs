//! White noise buffers.

use rand::Rng;

/// `sample_count` samples of white noise drawn from the thread-local RNG.
///
/// Each sample is independent and uniformly distributed in [-1.0, 1.0].
/// Nothing is seeded, so two calls never produce the same buffer.
///
/// # Examples
///
/// ```
/// use toneforge::noise::white_noise;
///
/// let noise = white_noise(256);
/// assert_eq!(noise.len(), 256);
/// assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
pub fn white_noise(sample_count: usize) -> Vec<f64> {
    white_noise_with_rng(sample_count, &mut rand::thread_rng())
}

/// Like [`white_noise`], drawing from a caller-supplied RNG.
///
/// ```
/// use rand::SeedableRng;
/// use toneforge::noise::white_noise_with_rng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let noise = white_noise_with_rng(16, &mut rng);
/// assert_eq!(noise.len(), 16);
/// ```
pub fn white_noise_with_rng<R: Rng>(sample_count: usize, rng: &mut R) -> Vec<f64> {
    (0..sample_count)
        .map(|_| rng.gen_range(-1.0..=1.0))
        .collect()
}
