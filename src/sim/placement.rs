//! Random spawn placement

use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniform integer Y in `[min, max)`. The band must be non-empty.
pub fn spawn_y<R: Rng + ?Sized>(rng: &mut R, band: (i32, i32)) -> i32 {
    rng.random_range(band.0..band.1)
}

/// Pick one of `options` at random
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, options: &'a [T]) -> Option<&'a T> {
    options.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_band_edges() {
        let mut rng = Pcg32::seed_from_u64(1);
        let ys: Vec<i32> = (0..5000).map(|_| spawn_y(&mut rng, (100, 500))).collect();
        assert!(ys.iter().all(|&y| (100..500).contains(&y)));
        assert!(ys.contains(&100));
        assert!(!ys.contains(&500));
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(pick(&mut rng, &empty).is_none());
        assert_eq!(pick(&mut rng, &[4]), Some(&4));
    }

    proptest! {
        #[test]
        fn prop_spawn_y_within_band(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let y = spawn_y(&mut rng, (100, 500));
            prop_assert!((100..500).contains(&y));
        }
    }
}
