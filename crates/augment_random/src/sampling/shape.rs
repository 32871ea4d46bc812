//! Output shapes and scalar-or-array sample containers.

use ndarray::{arr0, Array1, ArrayD, IxDyn};

use crate::error::{RandomError, RandomResult};

/// Axis lengths of a requested output array.
///
/// Converts from a single length, a fixed-size array, a tuple, a slice or a
/// `Vec<usize>`:
///
/// ```rust
/// use augment_random::Shape;
///
/// assert_eq!(Shape::from(5usize).dims(), &[5]);
/// assert_eq!(Shape::from((2usize, 3usize)).dims(), &[2, 3]);
/// assert_eq!(Shape::from([4usize, 4, 3]).ndim(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a shape from explicit axis lengths.
    pub fn new(dims: Vec<usize>) -> Self {
        Self(dims)
    }

    /// Axis lengths.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total element count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the product overflows or exceeds
    /// `isize::MAX`, the largest element count `ndarray` accepts.
    pub fn num_elements(&self) -> RandomResult<usize> {
        self.0
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or_else(|| self.too_large())
    }

    /// Element count of an array of `T` with this shape.
    ///
    /// # Errors
    ///
    /// Same as [`Shape::num_elements`], and also when the array would need
    /// more than `isize::MAX` bytes.
    pub fn num_elements_for<T>(&self) -> RandomResult<usize> {
        let n = self.num_elements()?;
        n.checked_mul(std::mem::size_of::<T>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .map(|_| n)
            .ok_or_else(|| self.too_large())
    }

    fn too_large(&self) -> RandomError {
        RandomError::invalid("size", format!("shape {:?} is too large", self.0))
    }

    pub(crate) fn to_ixdyn(&self) -> IxDyn {
        IxDyn(&self.0)
    }
}

impl From<usize> for Shape {
    fn from(len: usize) -> Self {
        Self(vec![len])
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self(dims.to_vec())
    }
}

impl From<(usize, usize)> for Shape {
    fn from((a, b): (usize, usize)) -> Self {
        Self(vec![a, b])
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self(vec![a, b, c])
    }
}

/// Result of a draw: a single value when no size was requested, otherwise an
/// array of the requested shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample<T> {
    /// Single value (`size` was `None`)
    Scalar(T),
    /// Array with the requested shape
    Array(ArrayD<T>),
}

impl<T> Sample<T> {
    /// Returns `true` for [`Sample::Scalar`].
    pub fn is_scalar(&self) -> bool {
        matches!(self, Sample::Scalar(_))
    }

    /// The scalar value, or `None` for an array sample.
    pub fn scalar(self) -> Option<T> {
        match self {
            Sample::Scalar(v) => Some(v),
            Sample::Array(_) => None,
        }
    }

    /// Converts into an array; a scalar becomes a 0-dimensional array.
    pub fn into_array(self) -> ArrayD<T> {
        match self {
            Sample::Scalar(v) => arr0(v).into_dyn(),
            Sample::Array(a) => a,
        }
    }

    /// Shape of the sample (empty for a scalar).
    pub fn shape(&self) -> &[usize] {
        match self {
            Sample::Scalar(_) => &[],
            Sample::Array(a) => a.shape(),
        }
    }

    /// Number of drawn values.
    pub fn len(&self) -> usize {
        match self {
            Sample::Scalar(_) => 1,
            Sample::Array(a) => a.len(),
        }
    }

    /// Returns `true` when an array sample holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over drawn values in logical (row-major) order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Sample::Scalar(v) => Box::new(std::iter::once(v)),
            Sample::Array(a) => Box::new(a.iter()),
        }
    }

    /// Copies drawn values into a flat vector in logical order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Applies `f` to every value, keeping the shape.
    pub fn map<U, F>(self, mut f: F) -> Sample<U>
    where
        T: Clone,
        F: FnMut(T) -> U,
    {
        match self {
            Sample::Scalar(v) => Sample::Scalar(f(v)),
            Sample::Array(a) => Sample::Array(a.mapv(f)),
        }
    }
}

impl<T> From<Vec<T>> for Sample<T> {
    /// Wraps already drawn values as a 1-D array sample.
    fn from(values: Vec<T>) -> Self {
        Sample::Array(Array1::from(values).into_dyn())
    }
}

/// Draws one value, or fills an array of `size`, by calling `draw` repeatedly.
pub(crate) fn fill<T, F>(size: Option<&Shape>, mut draw: F) -> RandomResult<Sample<T>>
where
    F: FnMut() -> T,
{
    match size {
        None => Ok(Sample::Scalar(draw())),
        Some(shape) => {
            shape.num_elements_for::<T>()?;
            Ok(Sample::Array(ArrayD::from_shape_simple_fn(
                shape.to_ixdyn(),
                draw,
            )))
        }
    }
}

/// Arranges already drawn values into `size`.
pub(crate) fn arrange<T>(size: Option<&Shape>, mut values: Vec<T>) -> RandomResult<Sample<T>> {
    match size {
        None => values
            .pop()
            .map(Sample::Scalar)
            .ok_or_else(|| RandomError::invalid("size", "no value was drawn")),
        Some(shape) => {
            shape.num_elements_for::<T>()?;
            ArrayD::from_shape_vec(shape.to_ixdyn(), values)
                .map(Sample::Array)
                .map_err(|e| RandomError::invalid("size", e.to_string()))
        }
    }
}
