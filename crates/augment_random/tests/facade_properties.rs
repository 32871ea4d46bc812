//! Integration tests for the sampling facade.
//!
//! Exercises every operation through the public API, both with an explicit
//! `RandomState` and with a freshly provisioned one.

use augment_random::rng::RandomState;
use augment_random::sampling::*;
use augment_random::{RandomError, Shape};
use proptest::prelude::*;

/// Replaying a seed replays a whole mixed sequence of operations.
#[test]
fn test_shared_state_is_reproducible() {
    fn run(seed: u32) -> (Vec<f64>, Vec<usize>, Vec<i32>, f64) {
        let mut rng = RandomState::from_seed(seed);
        let u = uniform_with(&mut rng, &UniformParams::default().with_size(8usize))
            .unwrap()
            .to_vec();
        let p = permutation_with(&mut rng, 10);
        let r = randint_with(&mut rng, &RandintParams::new(0, Some(100)).with_size(5usize))
            .unwrap()
            .to_vec();
        let b = beta_with(&mut rng, &BetaParams::default()).unwrap();
        (u, p, r, b)
    }

    assert_eq!(run(31337), run(31337));
    assert_ne!(run(31337), run(31338));
}

/// Successive calls on one state give different (but repeatable) values.
#[test]
fn test_sequential_calls_differ() {
    let mut rng = RandomState::from_seed(1);
    let first = random_with(&mut rng, Some(&Shape::from(4usize))).unwrap();
    let second = random_with(&mut rng, Some(&Shape::from(4usize))).unwrap();
    assert_ne!(first, second);
}

/// Operations without an explicit source provision their own.
#[test]
fn test_fresh_source_operations() {
    assert!(uniform(&UniformParams::default()).unwrap().is_scalar());
    assert!((0.0..=1.0).contains(&beta(&BetaParams::default()).unwrap()));
    assert_eq!(rand(&Shape::from((2usize, 2usize))).unwrap().len(), 4);
    assert_eq!(randn(&Shape::from((2usize, 3usize))).unwrap().shape(), &[2, 3]);
    assert_eq!(normal(&NormalParams::new(5.0, 0.0)).unwrap().scalar(), Some(5.0));
    assert!(poisson(&PoissonParams::default()).is_ok());
    assert_eq!(permutation(5).unwrap().len(), 5);
    assert_eq!(permutation_of(&["a", "b"]).unwrap().len(), 2);
    let v = randint(&RandintParams::new(0, Some(10))).unwrap().scalar().unwrap();
    assert!((0..10).contains(&v));
    assert!(random(None).unwrap().is_scalar());
    assert!(choice(&[1, 2, 3], &ChoiceParams::default()).is_ok());
    assert!(choice_index(3, &ChoiceParams::default()).is_ok());

    let mut data = vec![1, 2, 3, 4];
    let same = shuffle(&mut data).unwrap();
    same.sort_unstable();
    assert_eq!(data, vec![1, 2, 3, 4]);

    let mut grid = ndarray::Array2::<u8>::zeros((3, 2));
    assert!(shuffle_rows(&mut grid).is_ok());
    assert_eq!(permutation_of_array(&grid).unwrap().shape(), &[3, 2]);
}

/// Invalid arguments are reported, never corrected.
#[test]
fn test_invalid_arguments_are_rejected() {
    let mut rng = RandomState::from_seed(0);
    let errors = [
        normal_with(&mut rng, &NormalParams::new(0.0, -1.0)).unwrap_err(),
        poisson_with(&mut rng, &PoissonParams::new(-1.0)).unwrap_err(),
        uniform_with(&mut rng, &UniformParams::new(2.0, 1.0)).unwrap_err(),
        beta_with(&mut rng, &BetaParams::new(-1.0, 1.0)).unwrap_err(),
        choice_with(
            &mut rng,
            &[1, 2],
            &ChoiceParams::default().with_p(vec![1.0]),
        )
        .unwrap_err(),
        choice_with(
            &mut rng,
            &[1, 2],
            &ChoiceParams::default().with_size(3usize).with_replace(false),
        )
        .unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, RandomError::InvalidArgument { .. }), "{}", err);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_uniform_within_bounds(
        seed in any::<u32>(),
        low in -1.0e6..1.0e6f64,
        width in 0.0..1.0e6f64,
    ) {
        let high = low + width;
        let mut rng = RandomState::from_seed(seed);
        let sample = uniform_with(&mut rng, &UniformParams::new(low, high).with_size(64usize)).unwrap();
        for &v in sample.iter() {
            if low == high {
                prop_assert_eq!(v, low);
            } else {
                prop_assert!(v >= low && v < high, "{} not in [{}, {})", v, low, high);
            }
        }
    }

    #[test]
    fn prop_permutation_is_bijection(seed in any::<u32>(), n in 0..500usize) {
        let mut rng = RandomState::from_seed(seed);
        let mut perm = permutation_with(&mut rng, n);
        perm.sort_unstable();
        prop_assert_eq!(perm, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn prop_shuffle_preserves_multiset(seed in any::<u32>(), mut values in prop::collection::vec(0u16..50, 0..200)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        let mut rng = RandomState::from_seed(seed);
        let ptr = values.as_ptr();
        let returned = shuffle_with(&mut rng, &mut values);
        prop_assert_eq!(returned.as_ptr(), ptr);
        values.sort_unstable();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn prop_choice_without_replacement_oversized(seed in any::<u32>(), len in 0..20usize, extra in 1..10usize) {
        let population: Vec<usize> = (0..len).collect();
        let params = ChoiceParams::default().with_size(len + extra).with_replace(false);
        let mut rng = RandomState::from_seed(seed);
        let err = choice_with(&mut rng, &population, &params).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }

    #[test]
    fn prop_randint_excludes_high(seed in any::<u32>()) {
        let mut rng = RandomState::from_seed(seed);
        let sample = randint_with(&mut rng, &RandintParams::new(0, Some(10)).with_size(256usize)).unwrap();
        prop_assert!(sample.iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn prop_normal_zero_scale_is_exact(seed in any::<u32>(), loc in -1.0e9..1.0e9f64) {
        let mut rng = RandomState::from_seed(seed);
        let v = normal_with(&mut rng, &NormalParams::new(loc, 0.0)).unwrap().scalar().unwrap();
        prop_assert_eq!(v, loc);
    }
}
