//! Permutations, random choice and in-place shuffling.

use ndarray::{Array, ArrayBase, Axis, Data, DataMut, RemoveAxis, Zip};
use rand::distributions::WeightedIndex;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use rand_distr::Distribution;

use super::shape::{arrange, Sample, Shape};
use crate::error::{RandomError, RandomResult};
use crate::rng::new_source;

/// Tolerance on `sum(p) == 1`, the square root of machine epsilon.
const PROBABILITY_SUM_TOLERANCE: f64 = 1.490_116_119_384_765_6e-8;

/// Random permutation of `0..n` using `rng`.
pub fn permutation_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}

/// Random permutation of `0..n` using a freshly seeded source.
pub fn permutation(n: usize) -> RandomResult<Vec<usize>> {
    Ok(permutation_with(&mut new_source()?, n))
}

/// Permuted copy of `items`; the input is left untouched.
pub fn permutation_of_with<R, T>(rng: &mut R, items: &[T]) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let mut permuted = items.to_vec();
    permuted.shuffle(rng);
    permuted
}

/// [`permutation_of_with`] on a freshly seeded source.
pub fn permutation_of<T: Clone>(items: &[T]) -> RandomResult<Vec<T>> {
    Ok(permutation_of_with(&mut new_source()?, items))
}

/// Copy of `array` with its sub-arrays along the first axis permuted.
///
/// # Errors
///
/// Returns `InvalidArgument` for a 0-dimensional array.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::permutation_of_array_with;
/// use ndarray::array;
///
/// let mut rng = RandomState::from_seed(3);
/// let rows = array![[1, 2], [3, 4], [5, 6]];
/// let permuted = permutation_of_array_with(&mut rng, &rows).unwrap();
/// assert_eq!(permuted.shape(), rows.shape());
/// ```
pub fn permutation_of_array_with<R, S, D>(
    rng: &mut R,
    array: &ArrayBase<S, D>,
) -> RandomResult<Array<S::Elem, D>>
where
    R: Rng + ?Sized,
    S: Data,
    S::Elem: Clone,
    D: RemoveAxis,
{
    if array.ndim() == 0 {
        return Err(RandomError::invalid(
            "x",
            "must be an integer or at least 1-dimensional",
        ));
    }
    let order = permutation_with(rng, array.len_of(Axis(0)));
    Ok(array.select(Axis(0), &order))
}

/// [`permutation_of_array_with`] on a freshly seeded source.
pub fn permutation_of_array<S, D>(array: &ArrayBase<S, D>) -> RandomResult<Array<S::Elem, D>>
where
    S: Data,
    S::Elem: Clone,
    D: RemoveAxis,
{
    permutation_of_array_with(&mut new_source()?, array)
}

/// Parameters for [`choice`] and [`choice_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceParams {
    /// Output shape; `None` draws a single element
    pub size: Option<Shape>,
    /// Whether a drawn element stays eligible for later draws
    pub replace: bool,
    /// Per-element probabilities; uniform when `None`
    pub p: Option<Vec<f64>>,
}

impl Default for ChoiceParams {
    fn default() -> Self {
        Self {
            size: None,
            replace: true,
            p: None,
        }
    }
}

impl ChoiceParams {
    /// Requests an array of the given shape.
    pub fn with_size(mut self, size: impl Into<Shape>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets sampling with (`true`) or without (`false`) replacement.
    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Sets per-element probabilities.
    pub fn with_p(mut self, p: Vec<f64>) -> Self {
        self.p = Some(p);
        self
    }

    fn draw_count(&self) -> RandomResult<usize> {
        match &self.size {
            None => Ok(1),
            Some(shape) => shape.num_elements_for::<usize>(),
        }
    }

    /// Checks `p` against a population of `n` elements.
    pub fn validate(&self, n: usize) -> RandomResult<()> {
        let Some(p) = &self.p else {
            return Ok(());
        };
        if p.len() != n {
            return Err(RandomError::invalid(
                "p",
                format!("length {} does not match population size {}", p.len(), n),
            ));
        }
        if let Some(w) = p.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(RandomError::invalid(
                "p",
                format!("probabilities must be finite and non-negative, got {}", w),
            ));
        }
        let total: f64 = p.iter().sum();
        if (total - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(RandomError::invalid(
                "p",
                format!("probabilities do not sum to 1 (sum = {})", total),
            ));
        }
        Ok(())
    }
}

/// Draws indices into a population of `n` elements using `rng`.
///
/// Without replacement every index appears at most once; with weights `p`,
/// zero-probability indices are never drawn.
pub fn choice_index_with<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    params: &ChoiceParams,
) -> RandomResult<Sample<usize>> {
    params.validate(n)?;
    let count = params.draw_count()?;
    if count == 0 {
        return arrange(params.size.as_ref(), Vec::new());
    }
    if n == 0 {
        return Err(RandomError::invalid(
            "a",
            "cannot be empty unless no samples are taken",
        ));
    }

    let indices = if params.replace {
        match &params.p {
            None => (0..count).map(|_| rng.gen_range(0..n)).collect(),
            Some(p) => {
                let dist =
                    WeightedIndex::new(p).map_err(|e| RandomError::invalid("p", e.to_string()))?;
                (0..count).map(|_| dist.sample(rng)).collect()
            }
        }
    } else {
        if count > n {
            return Err(RandomError::invalid(
                "size",
                format!(
                    "cannot take a larger sample ({}) than population ({}) when replace is false",
                    count, n
                ),
            ));
        }
        match &params.p {
            None => index::sample(rng, n, count).into_vec(),
            Some(p) => weighted_without_replacement(rng, p, count)?,
        }
    };
    arrange(params.size.as_ref(), indices)
}

fn weighted_without_replacement<R: Rng + ?Sized>(
    rng: &mut R,
    p: &[f64],
    count: usize,
) -> RandomResult<Vec<usize>> {
    let eligible: Vec<usize> = (0..p.len()).filter(|&i| p[i] > 0.0).collect();
    if count > eligible.len() {
        return Err(RandomError::invalid(
            "p",
            format!(
                "fewer non-zero entries ({}) than size ({})",
                eligible.len(),
                count
            ),
        ));
    }
    let picked = index::sample_weighted(rng, eligible.len(), |i| p[eligible[i]], count)
        .map_err(|e| RandomError::invalid("p", e.to_string()))?;
    Ok(picked.into_iter().map(|i| eligible[i]).collect())
}

/// [`choice_index_with`] on a freshly seeded source.
pub fn choice_index(n: usize, params: &ChoiceParams) -> RandomResult<Sample<usize>> {
    choice_index_with(&mut new_source()?, n, params)
}

/// Draws elements of `a` using `rng`.
///
/// # Examples
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::{choice_with, ChoiceParams};
///
/// let mut rng = RandomState::from_seed(8);
/// let modes = ["nearest", "bilinear", "bicubic"];
/// let params = ChoiceParams::default().with_p(vec![0.0, 0.5, 0.5]);
/// let picked = choice_with(&mut rng, &modes, &params).unwrap().scalar().unwrap();
/// assert_ne!(picked, "nearest");
/// ```
pub fn choice_with<R, T>(rng: &mut R, a: &[T], params: &ChoiceParams) -> RandomResult<Sample<T>>
where
    R: Rng + ?Sized,
    T: Clone,
{
    if let Some(shape) = &params.size {
        shape.num_elements_for::<T>()?;
    }
    Ok(choice_index_with(rng, a.len(), params)?.map(|i| a[i].clone()))
}

/// [`choice_with`] on a freshly seeded source.
pub fn choice<T: Clone>(a: &[T], params: &ChoiceParams) -> RandomResult<Sample<T>> {
    choice_with(&mut new_source()?, a, params)
}

/// Shuffles `a` in place using `rng` and hands back the same reference.
///
/// ```rust
/// use augment_random::rng::RandomState;
/// use augment_random::sampling::shuffle_with;
///
/// let mut rng = RandomState::from_seed(4);
/// let mut channels = vec![0, 1, 2];
/// shuffle_with(&mut rng, &mut channels).sort();
/// assert_eq!(channels, vec![0, 1, 2]);
/// ```
pub fn shuffle_with<'a, R, S, T>(rng: &mut R, a: &'a mut S) -> &'a mut S
where
    R: Rng + ?Sized,
    S: AsMut<[T]> + ?Sized,
{
    a.as_mut().shuffle(rng);
    a
}

/// [`shuffle_with`] on a freshly seeded source.
pub fn shuffle<S, T>(a: &mut S) -> RandomResult<&mut S>
where
    S: AsMut<[T]> + ?Sized,
{
    Ok(shuffle_with(&mut new_source()?, a))
}

/// Shuffles the sub-arrays of `array` along its first axis in place.
///
/// # Errors
///
/// Returns `InvalidArgument` for a 0-dimensional array.
pub fn shuffle_rows_with<'a, R, S, D>(
    rng: &mut R,
    array: &'a mut ArrayBase<S, D>,
) -> RandomResult<&'a mut ArrayBase<S, D>>
where
    R: Rng + ?Sized,
    S: DataMut,
    D: RemoveAxis,
{
    if array.ndim() == 0 {
        return Err(RandomError::invalid("a", "must be at least 1-dimensional"));
    }
    {
        let mut rows: Vec<_> = array.axis_iter_mut(Axis(0)).collect();
        // Fisher-Yates over row views
        for i in (1..rows.len()).rev() {
            let j = rng.gen_range(0..=i);
            if i != j {
                let (head, tail) = rows.split_at_mut(i);
                Zip::from(&mut head[j])
                    .and(&mut tail[0])
                    .for_each(|a, b| std::mem::swap(a, b));
            }
        }
    }
    Ok(array)
}

/// [`shuffle_rows_with`] on a freshly seeded source.
pub fn shuffle_rows<S, D>(array: &mut ArrayBase<S, D>) -> RandomResult<&mut ArrayBase<S, D>>
where
    S: DataMut,
    D: RemoveAxis,
{
    shuffle_rows_with(&mut new_source()?, array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomState;
    use ndarray::{array, Array2};

    #[test]
    fn test_permutation_is_bijection() {
        let mut rng = RandomState::from_seed(21);
        let mut perm = permutation_with(&mut rng, 100);
        perm.sort_unstable();
        assert_eq!(perm, (0..100).collect::<Vec<_>>());
        assert!(permutation_with(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_permutation_of_does_not_mutate_input() {
        let mut rng = RandomState::from_seed(21);
        let items = vec![1.5, 2.5, 3.5, 4.5];
        let mut permuted = permutation_of_with(&mut rng, &items);
        assert_eq!(items, vec![1.5, 2.5, 3.5, 4.5]);
        permuted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(permuted, items);
    }

    #[test]
    fn test_permutation_of_array_keeps_rows_intact() {
        let mut rng = RandomState::from_seed(5);
        let grid = array![[0, 0], [1, 1], [2, 2], [3, 3]];
        let permuted = permutation_of_array_with(&mut rng, &grid).unwrap();
        let mut firsts: Vec<i32> = permuted.rows().into_iter().map(|r| {
            assert_eq!(r[0], r[1]);
            r[0]
        }).collect();
        firsts.sort_unstable();
        assert_eq!(firsts, vec![0, 1, 2, 3]);
        assert_eq!(grid, array![[0, 0], [1, 1], [2, 2], [3, 3]]);
    }

    #[test]
    fn test_permutation_of_zero_dim_array_fails() {
        let mut rng = RandomState::from_seed(5);
        let scalar = ndarray::arr0(1.0).into_dyn();
        assert!(permutation_of_array_with(&mut rng, &scalar).is_err());
    }

    #[test]
    fn test_choice_with_replacement_shape() {
        let mut rng = RandomState::from_seed(2);
        let pool = ['a', 'b', 'c'];
        let picked = choice_with(&mut rng, &pool, &ChoiceParams::default().with_size((2usize, 5usize)))
            .unwrap();
        assert_eq!(picked.shape(), &[2, 5]);
        assert!(picked.iter().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_choice_without_replacement_is_distinct() {
        let mut rng = RandomState::from_seed(2);
        let params = ChoiceParams::default()
            .with_size(10usize)
            .with_replace(false);
        let mut picked = choice_index_with(&mut rng, 10, &params).unwrap().to_vec();
        picked.sort_unstable();
        assert_eq!(picked, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_choice_without_replacement_oversized() {
        let mut rng = RandomState::from_seed(2);
        let params = ChoiceParams::default()
            .with_size(4usize)
            .with_replace(false);
        let err = choice_with(&mut rng, &[1, 2, 3], &params).unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument { name: "size", .. }));
    }

    #[test]
    fn test_choice_rejects_shape_beyond_addressable_bytes() {
        let mut rng = RandomState::from_seed(2);
        let params = ChoiceParams::default().with_size(1usize << 61);
        let err = choice_index_with(&mut rng, 3, &params).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = choice_with(&mut rng, &[1u8, 2, 3], &params).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_choice_weighted_skips_zero_probability() {
        let mut rng = RandomState::from_seed(2);
        let params = ChoiceParams::default()
            .with_size(1000usize)
            .with_p(vec![0.0, 0.3, 0.7]);
        let picked = choice_index_with(&mut rng, 3, &params).unwrap();
        assert!(picked.iter().all(|&i| i != 0));

        let params = ChoiceParams::default()
            .with_size(2usize)
            .with_replace(false)
            .with_p(vec![0.0, 0.3, 0.7]);
        let mut picked = choice_index_with(&mut rng, 3, &params).unwrap().to_vec();
        picked.sort_unstable();
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn test_choice_rejects_bad_probabilities() {
        let mut rng = RandomState::from_seed(2);
        for p in [vec![0.5, 0.5], vec![0.5, 0.6, -0.1], vec![0.2, 0.2, 0.2], vec![f64::NAN, 0.5, 0.5]] {
            let err = choice_index_with(&mut rng, 3, &ChoiceParams::default().with_p(p)).unwrap_err();
            assert!(matches!(err, RandomError::InvalidArgument { name: "p", .. }));
        }

        let params = ChoiceParams::default()
            .with_size(3usize)
            .with_replace(false)
            .with_p(vec![0.0, 0.0, 1.0]);
        let err = choice_index_with(&mut rng, 3, &params).unwrap_err();
        assert!(matches!(err, RandomError::InvalidArgument { name: "p", .. }));
    }

    #[test]
    fn test_choice_empty_population() {
        let mut rng = RandomState::from_seed(2);
        let empty: [u8; 0] = [];
        assert!(choice_with(&mut rng, &empty, &ChoiceParams::default()).is_err());
        let none = choice_with(&mut rng, &empty, &ChoiceParams::default().with_size(0usize)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_shuffle_returns_same_reference() {
        let mut rng = RandomState::from_seed(6);
        let mut values: Vec<u32> = (0..50).collect();
        let ptr = values.as_ptr();
        let returned = shuffle_with(&mut rng, &mut values);
        assert_eq!(returned.as_ptr(), ptr);
        values.sort_unstable();
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_rows_in_place() {
        let mut rng = RandomState::from_seed(6);
        let mut grid = Array2::from_shape_fn((6, 3), |(r, _)| r);
        shuffle_rows_with(&mut rng, &mut grid).unwrap();
        let mut firsts = Vec::new();
        for row in grid.rows() {
            assert!(row.iter().all(|&v| v == row[0]));
            firsts.push(row[0]);
        }
        firsts.sort_unstable();
        assert_eq!(firsts, (0..6).collect::<Vec<_>>());
    }
}
