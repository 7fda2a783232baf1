use std::{array, fmt};

use crate::{
    traits::{Number, Sqrt},
    Error, MinMax, One, Zero,
};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions
///   build a vector directly from its elements.
/// - [`Vector::splat`] repeats one value across all `N` elements;
///   [`Vector::from_fn`] computes each element from its index.
/// - The [`From`] impl converts an array of length `N`, so a length mismatch
///   does not compile. The [`TryFrom`] impl converts a slice and reports
///   [`Error::ShapeMismatch`] when the slice does not hold exactly `N`
///   elements.
/// - [`Default`] fills the vector with `T::default()`; [`Vector::ZERO`] with
///   zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are the axis unit
///   vectors, available for up to 4 dimensions.
///
/// # Element Access
///
/// - Vectors of up to 4 dimensions expose their elements as the fields `x`,
///   `y`, `z` and `w`.
/// - The [`Index`] and [`IndexMut`] impls provide positional access, just
///   like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] (plus their `mut` variants),
///   [`Vector::into_array`], and the [`AsRef`]/[`AsMut`]/[`From`] impls
///   expose the underlying storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented whenever
///   the element type supports them, allowing safe transmutation.
///
/// # Text Output
///
/// The [`Display`] impl renders `[v0, v1, ..., vN-1]`, each element in its
/// natural numeric form. The [`Debug`] impl uses tuple notation instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Display`]: std::fmt::Display
/// [`Debug`]: std::fmt::Debug
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The zero vector, with every element set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// The unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// The unit vector along the X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// The unit vector along the Y axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// The unit vector along the Z axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// The unit vector along the W axis.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with every element set to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vector::splat(7), vec4(7, 7, 7, 7));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by invoking a closure with each element's index.
    ///
    /// The vector counterpart of [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = Vector::from_fn(|i| 2 * i);
    /// assert_eq!(v, vec3(0, 2, 4));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms each element with `f`, producing a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec2(2, 3).map(|i| i * i);
    /// assert_eq!(v, vec2(4, 9));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec2(1, 2);
    /// let b = vec2('a', 'b');
    /// assert_eq!(a.zip(b), vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut pairs = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| pairs.next().unwrap())
    }

    /// Borrows the elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(7, 8).as_array(), &[7, 8]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut v = vec2(7, 8);
    /// v.as_mut_array()[0] = 9;
    /// assert_eq!(v, [9, 8]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(7, 8).as_slice(), &[7, 8]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut v = vec2(7, 8);
    /// v.as_mut_slice()[1] = 9;
    /// assert_eq!(v, [7, 9]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the vector into its backing `N`-element array.
    ///
    /// The equivalent [`From`] impl can also be used, but this method is
    /// often shorter and needs no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(7, 8).into_array(), [7, 8]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared Euclidean length, skipping the square root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(1, 2, 2).length2(), 9);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length (norm) of the vector.
    ///
    /// The sum of squares is accumulated in `T` and the square root is
    /// converted back to `T`, so the result truncates for integer elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(3.0_f32, 4.0).length(), 5.0);
    /// assert_eq!(vec2(3, 4).length(), 5);
    /// assert_eq!(vec2(1, 1).length(), 1);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales the vector to length 1 by dividing it by its own length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec2(0.0, -3.0).normalize();
    /// assert_eq!(v, vec2(0.0, -1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product of `self` and `other`.
    ///
    /// The sign of the result describes the relative orientation of the two
    /// vectors: positive while the angle between them is below 90°, zero at
    /// exactly 90°, and negative above.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(2, 3).dot(vec2(4, -1)), 5);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[i] * other[i])
    }

    /// Element-wise minimum of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec2(1.0, f32::NAN);
    /// let b = vec2(-2.0, 5.0);
    /// assert_eq!(a.min(b), vec2(-2.0, 5.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Element-wise maximum of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let a = vec2(1.0, f32::NAN);
    /// let b = vec2(-2.0, 5.0);
    /// assert_eq!(a.max(b), vec2(1.0, 5.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.max(b))
    }

    /// Clamps each element of `self` into the range spanned by the
    /// corresponding elements of `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let v = vec3(-5, 2, 9);
    /// assert_eq!(v.clamp(Vector::splat(1), Vector::splat(6)), vec3(1, 2, 6));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(min)
            .zip(max)
            .map(|((value, lo), hi)| value.clamp(lo, hi))
    }
}

impl<T> Vector<T, 1> {
    /// Removes the last element of this vector, yielding a vector with zero
    /// elements.
    pub fn truncate(self) -> Vector<T, 0> {
        Vector([])
    }

    /// Appends another value to the vector, yielding a vector with 2
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec1(4.0).extend(5.0), vec2(4.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.into_array();
        vec2(x, value)
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element of this vector, yielding a vector with a
    /// single element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(4.0, 5.0).truncate(), vec1(4.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.into_array();
        vec1(x)
    }

    /// Appends another value to the vector, yielding a vector with 3
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec2(4.0, 5.0).extend(6.0), vec3(4.0, 5.0, 6.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        vec3(x, y, value)
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(4.0, 5.0, 6.0).truncate(), vec2(4.0, 5.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec3(4.0, 5.0, 6.0).extend(1.0), vec4(4.0, 5.0, 6.0, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        vec4(x, y, z, value)
    }

    /// Computes the 3D cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands; swapping them inverts
    /// its direction. The cross product is only defined for 3-dimensional
    /// vectors and does not generalize to other dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.into_array();
        let [bx, by, bz] = other.into_array();
        vec3(
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        )
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3
    /// elements.
    ///
    /// Useful for dropping the W coordinate of a homogeneous vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// assert_eq!(vec4(4.0, 5.0, 6.0, 1.0).truncate(), vec3(4.0, 5.0, 6.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        vec3(x, y, z)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Runtime-checked conversion from a slice.
///
/// This is the one construction path where the element count is not known at
/// compile time, so it is validated: a slice whose length is not exactly `N`
/// is rejected with [`Error::ShapeMismatch`].
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let v = Vector::<i32, 3>::try_from(&[1, 2, 3][..]).unwrap();
/// assert_eq!(v, vec3(1, 2, 3));
///
/// let err = Vector::<i32, 3>::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err, Error::ShapeMismatch { expected: 3, actual: 2 });
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self, Error> {
        match <[T; N]>::try_from(slice) {
            Ok(array) => Ok(Self(array)),
            Err(_) => Err(Error::ShapeMismatch {
                expected: N,
                actual: slice.len(),
            }),
        }
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Renders the vector as `[v0, v1, ..., vN-1]`.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// assert_eq!(vec3(1, 2, 3).to_string(), "[1, 2, 3]");
/// assert_eq!(vec2(1.5, -2.0).to_string(), "[1.5, -2]");
/// ```
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Shorthand for building a [`Vec1`].
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Shorthand for building a [`Vec2`].
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Shorthand for building a [`Vec3`].
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Shorthand for building a [`Vec4`].
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::Y.x, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec3f::Y[1], 1.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W[3], 1.0);

        let mut v = vec2(3, 4);
        assert_eq!((v.x, v.y), (3, 4));
        assert_eq!((v[0], v[1]), (3, 4));

        v.x = 30;
        v[1] = 40;
        assert_eq!(v, vec2(30, 40));
        assert_eq!((v.x, v.y), (30, 40));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "[0, 0, 0, 1]");
        assert_eq!(format!("{:?}", vec3(1.5_f32, 0.0, -2.0)), "(1.5, 0.0, -2.0)");
        assert_eq!(format!("{}", vec3(1, -20, 3)), "[1, -20, 3]");
        assert_eq!(format!("{}", vec1(5)), "[5]");
    }

    #[test]
    fn from_slice() {
        let v = Vector::<i32, 4>::try_from(&[1, 2, 3, 4][..]).unwrap();
        assert_eq!(v, vec4(1, 2, 3, 4));

        assert_eq!(
            Vector::<i32, 4>::try_from(&[1, 2, 3][..]),
            Err(Error::ShapeMismatch {
                expected: 4,
                actual: 3
            }),
        );
        assert_eq!(
            Vector::<i32, 2>::try_from(&[1, 2, 3][..]),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 3
            }),
        );
    }

    #[test]
    fn add_sub_roundtrip() {
        let mut rng = fastrand::Rng::with_seed(0x1034);
        for _ in 0..100 {
            let a = Vector::<i32, 4>::from_fn(|_| rng.i32(-1000..1000));
            let b = Vector::<i32, 4>::from_fn(|_| rng.i32(-1000..1000));

            let sum = a + b;
            for i in 0..4 {
                assert_eq!(sum[i], a[i] + b[i]);
            }
            assert_eq!(sum - b, a);
        }
    }

    #[test]
    fn scalar_mul() {
        let a = vec3(1, -2, 3);
        assert_eq!(1 * a, a);
        assert_eq!(0 * a, Vector::ZERO);
        assert_eq!(3 * a, vec3(3, -6, 9));
        assert_eq!(a * 3, 3 * a);
        assert_eq!(0.5 * vec2(3.0, -1.0), vec2(1.5, -0.5));
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(2, -1, 4).dot(vec3(1, 5, 2)), 5);
        assert_eq!(vec3(2, -1, 4).dot(vec3(2, -1, 4)), 21);

        // The axes are orthonormal.
        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);

        let mut rng = fastrand::Rng::with_seed(0x2045);
        for _ in 0..100 {
            let a = Vector::<i64, 3>::from_fn(|_| rng.i64(-100..100));
            let b = Vector::<i64, 3>::from_fn(|_| rng.i64(-100..100));
            assert_eq!(a.dot(b), b.dot(a));
        }
    }

    #[test]
    fn cross() {
        let a = vec3(1, 2, 3);
        let b = vec3(-7, 8, 9);
        assert_eq!(a.cross(b), vec3(-6, -30, 22));

        let mut rng = fastrand::Rng::with_seed(0x3056);
        for _ in 0..100 {
            let a = Vector::<i32, 3>::from_fn(|_| rng.i32(-100..100));
            let b = Vector::<i32, 3>::from_fn(|_| rng.i32(-100..100));
            assert_eq!(a.cross(b), -1 * b.cross(a));
            assert_eq!(a.cross(b).dot(a), 0);
            assert_eq!(a.cross(b).dot(b), 0);
        }
    }

    #[test]
    fn normalize() {
        let v = vec3(1.0_f32, 2.0, 3.0).normalize();
        approx::assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
        approx::assert_relative_eq!(
            vec2(3.0_f64, 4.0).normalize(),
            vec2(0.6, 0.8),
            epsilon = 1e-12
        );
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3, 4).length(), 5);
        assert_eq!(vec2(3.0_f64, 4.0).length(), 5.0);
        assert_eq!(vec3(2, 10, 11).length(), 15);

        // Integer lengths truncate instead of promoting to float.
        assert_eq!(vec2(1, 1).length(), 1);
        assert_eq!(vec3(1, 1, 1).length(), 1);

        assert_eq!(Vec3f::Z.length(), 1.0);
        assert_eq!(Vector::<f32, 5>::ZERO.length(), 0.0);
    }

    #[test]
    fn min_max_clamp() {
        let a = vec3(1, -4, 7);
        let b = vec3(2, -6, 3);
        assert_eq!(a.min(b), vec3(1, -6, 3));
        assert_eq!(a.max(b), vec3(2, -4, 7));
        assert_eq!(a.clamp(Vector::splat(-5), Vector::splat(5)), vec3(1, -4, 5));
    }

    #[test]
    fn extend_truncate() {
        let v = vec3(2, 10, 2).extend(1);
        assert_eq!(v, vec4(2, 10, 2, 1));
        assert_eq!(v.truncate(), vec3(2, 10, 2));
        assert_eq!(vec2(5, 6).truncate(), vec1(5));
    }
}
