use std::{array, fmt};

use crate::{Error, Number, One, Vector, Zero};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns of elements of type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill the matrix from
///   nested arrays (or arrays of [`Vector`]s); the array shapes make a size
///   mismatch a compile error.
/// - [`Matrix::try_from_rows`] converts runtime-sized row slices, validating
///   the exact shape and reporting [`Error::ShapeMismatch`] otherwise.
/// - [`Matrix::from_fn`] computes each element from its row and column.
/// - [`Matrix::from_diagonal`] builds a square matrix from its diagonal.
/// - [`scaling_matrix`] and [`translation_matrix`] build homogeneous 4x4
///   transforms.
/// - [`Matrix::ZERO`] is the all-zero matrix; [`Matrix::IDENTITY`] carries 1
///   on the main diagonal and 0 everywhere else.
///
/// # Element Access
///
/// The [`Index`] and [`IndexMut`] impls take a 0-based `(row, column)` tuple,
/// in the order used in mathematical notation:
///
/// ```
/// # use linmath::*;
/// let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
/// mat[(1, 0)] = 30;
/// assert_eq!(mat[(1, 0)], 30);
/// assert_eq!(mat[(0, 1)], 2);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices.
/// [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead and can
/// be used for checked access; there is no unchecked access path.
///
/// ```
/// # use linmath::*;
/// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(mat.get(1, 1), Some(&4));
/// assert_eq!(mat.get(1, 2), None);
/// ```
///
/// Whole rows and columns can be read with [`Matrix::row`] and
/// [`Matrix::col`], and replaced with [`Matrix::set_row`] and
/// [`Matrix::set_col`], which validate both the index and the element count.
///
/// # Text Output
///
/// The [`Display`] impl renders a column-aligned table with each row wrapped
/// in `|` markers. The [`Debug`] impl prints a nested list of rows.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Display`]: std::fmt::Display
/// [`Debug`]: std::fmt::Debug
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The length of the main diagonal (the smaller of `R` and `C`).
    const DIAGONAL: usize = if R < C { R } else { C };

    /// Returns the number of rows, `R`.
    #[inline]
    pub const fn rows(&self) -> usize {
        R
    }

    /// Returns the number of columns, `C`.
    #[inline]
    pub const fn cols(&self) -> usize {
        C
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let by_row = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let by_col = Matrix::from_columns([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]);
    /// assert_eq!(by_row, by_col);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_columns([[1, 0], [0, 1], [7, 8]]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0, 7],
    ///     [0, 1, 8],
    /// ]));
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self
    where
        T: Copy,
    {
        let columns = columns.map(|col| col.into().into_array());
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a [`Matrix`] from runtime-sized row slices.
    ///
    /// The shape is validated exactly: the outer slice must hold `R` rows and
    /// every row must hold `C` elements. Anything else is rejected with
    /// [`Error::ShapeMismatch`]; rows are never silently truncated or
    /// zero-filled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::<i32, 2, 2>::try_from_rows(&[&[1, 2], &[3, 4]]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [3, 4]]));
    ///
    /// let err = Matrix::<i32, 2, 2>::try_from_rows(&[&[1, 2]]).unwrap_err();
    /// assert_eq!(err, Error::ShapeMismatch { expected: 2, actual: 1 });
    /// ```
    pub fn try_from_rows(rows: &[&[T]]) -> Result<Self, Error>
    where
        T: Copy,
    {
        if rows.len() != R {
            return Err(Error::ShapeMismatch {
                expected: R,
                actual: rows.len(),
            });
        }
        for row in rows {
            if row.len() != C {
                return Err(Error::ShapeMismatch {
                    expected: C,
                    actual: row.len(),
                });
            }
        }
        Ok(Self::from_fn(|row, col| rows[row][col]))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and
    /// column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_fn(|row, col| (row + 1) * (col + 1));
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [2, 4, 6],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Transforms each element with `f`, producing a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]).map(|elem| elem * 10);
    /// assert_eq!(mat, Matrix::from_rows([[10, 20], [30, 40]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns the transpose of this matrix (rows and columns swapped).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    ///     [5, 6],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 3, 5],
    ///     [2, 4, 6],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[col][row])
    }

    /// Returns the row at `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row >= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.row(1), vec2(3, 4));
    /// ```
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from(self.0[row])
    }

    /// Returns the column at `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col >= C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.col(0), vec2(1, 3));
    /// ```
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&4));
    /// assert_eq!(mat.get(2, 0), None);
    /// assert_eq!(mat.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// if let Some(elem) = mat.get_mut(0, 2) {
    ///     *elem = 30;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 999;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 30],
    ///     [4, 5, 6],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Replaces the row at index `row` with the elements of `data`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `row` is not below `R`, and with
    /// [`Error::ShapeMismatch`] if `data` does not hold exactly `C` elements.
    /// On failure the matrix is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.set_row(1, &[7, 8]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [7, 8],
    /// ]));
    ///
    /// assert!(mat.set_row(2, &[7, 8]).is_err());
    /// assert!(mat.set_row(0, &[7, 8, 9]).is_err());
    /// ```
    pub fn set_row(&mut self, row: usize, data: &[T]) -> Result<(), Error>
    where
        T: Copy,
    {
        if row >= R {
            return Err(Error::OutOfBounds {
                index: row,
                extent: R,
            });
        }
        if data.len() != C {
            return Err(Error::ShapeMismatch {
                expected: C,
                actual: data.len(),
            });
        }
        self.0[row].copy_from_slice(data);
        Ok(())
    }

    /// Replaces the column at index `col` with the elements of `data`.
    ///
    /// Fails with [`Error::OutOfBounds`] if `col` is not below `C`, and with
    /// [`Error::ShapeMismatch`] if `data` does not hold exactly `R` elements.
    /// On failure the matrix is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.set_col(0, &[7, 8]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [7, 2],
    ///     [8, 4],
    /// ]));
    /// ```
    pub fn set_col(&mut self, col: usize, data: &[T]) -> Result<(), Error>
    where
        T: Copy,
    {
        if col >= C {
            return Err(Error::OutOfBounds {
                index: col,
                extent: C,
            });
        }
        if data.len() != R {
            return Err(Error::ShapeMismatch {
                expected: R,
                actual: data.len(),
            });
        }
        for (row, value) in self.0.iter_mut().zip(data) {
            row[col] = *value;
        }
        Ok(())
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix, with 1 on the main diagonal and 0 everywhere
    /// else.
    ///
    /// Multiplying any vector or matrix with the identity returns it
    /// unchanged.
    pub const IDENTITY: Self = {
        let mut mat = Self::ZERO;
        let mut i = 0;
        while i < Self::DIAGONAL {
            mat.0[i][i] = T::ONE;
            i += 1;
        }
        mat
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the main diagonal of this square matrix as a [`Vector`].
    ///
    /// *Note*: This method is restricted to square matrices due to
    /// limitations in Rust's const generics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let mat = Matrix::from_rows([
    ///     [5, 1],
    ///     [2, 8],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [5, 8]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix holding `diag` on its main diagonal and zero
    /// everywhere else.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to
    /// allow type inference of the created [`Matrix`]. To create a non-square
    /// matrix from its diagonal, use [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linmath::*;
    /// let diag = Matrix::from_diagonal([4, 5, 6]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [4, 0, 0],
    ///     [0, 5, 0],
    ///     [0, 0, 6],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Renders the matrix as a column-aligned table.
///
/// Each column is as wide as the longest value it contains; every value is
/// right-aligned to that width with at least one leading space, and each row
/// is wrapped in `|` markers and terminated with a newline.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let mat = Matrix::from_rows([
///     [1, 2],
///     [30, 4],
/// ]);
/// assert_eq!(mat.to_string(), "|  1 2 |\n| 30 4 |\n");
/// ```
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = [0; C];
        for row in &self.0 {
            for (col, value) in row.iter().enumerate() {
                widths[col] = widths[col].max(value.to_string().len());
            }
        }

        for row in &self.0 {
            f.write_str("|")?;
            for (col, value) in row.iter().enumerate() {
                write!(f, " {:>width$}", value, width = widths[col])?;
            }
            f.write_str(" |\n")?;
        }
        Ok(())
    }
}

/// Creates a homogeneous 4x4 scaling transform from per-axis scale factors.
///
/// The result scales the X, Y and Z coordinates of a homogeneous
/// [`Vector<T, 4>`] by the corresponding element of `scale` and leaves the W
/// coordinate untouched.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let scale = scaling_matrix(vec3(2.0, 3.0, 4.0));
/// assert_eq!(scale * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
/// ```
pub fn scaling_matrix<T: Number>(scale: Vector<T, 3>) -> Matrix<T, 4, 4> {
    Matrix::from_diagonal(scale.extend(T::ONE))
}

/// Creates a homogeneous 4x4 translation transform.
///
/// The result is the identity matrix with the first three entries of the last
/// column replaced by `translate`, so multiplying it with a homogeneous
/// [`Vector<T, 4>`] whose W coordinate is 1 offsets the X, Y and Z
/// coordinates.
///
/// # Examples
///
/// ```
/// # use linmath::*;
/// let translate = translation_matrix(vec3(2.0, 10.0, 2.0));
/// assert_eq!(translate * vec4(1.0, 1.0, 1.0, 1.0), vec4(3.0, 11.0, 3.0, 1.0));
/// ```
pub fn translation_matrix<T: Number>(translate: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let mut mat = Matrix::IDENTITY;
    mat[(0, 3)] = translate.x;
    mat[(1, 3)] = translate.y;
    mat[(2, 3)] = translate.z;
    mat
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vector};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[7, 8, 9], [10, 11, 12]]),
            Mat2x3::from_columns([[7, 10], [8, 11], [9, 12]]),
        );
    }

    #[test]
    fn try_from_rows() {
        let mat = Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2, 3], &[4, 5, 6]]).unwrap();
        assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));

        // Too few rows.
        assert_eq!(
            Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2, 3]]),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 1
            }),
        );
        // Too many rows.
        assert_eq!(
            Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 3
            }),
        );
        // Ragged row.
        assert_eq!(
            Matrix::<i32, 2, 3>::try_from_rows(&[&[1, 2, 3], &[4, 5]]),
            Err(Error::ShapeMismatch {
                expected: 3,
                actual: 2
            }),
        );
    }

    #[test]
    fn extent() {
        let mat = Mat2x3::<i32>::ZERO;
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 3);
    }

    #[test]
    fn transpose() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.transpose(), Matrix::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn rows_and_cols() {
        let mat = Matrix::from_rows([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(mat.row(0), vec2(1, 2));
        assert_eq!(mat.row(2), vec2(5, 6));
        assert_eq!(mat.col(1), vec3(2, 4, 6));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([4, 9]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [4, 0],
            [0, 9],
        ]));

        assert_eq!(mat.into_diagonal(), [4, 9]);
        assert_eq!(Mat2::<i32>::IDENTITY.into_diagonal(), [1, 1]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[5, 6], [7, 8]]);

        // Debug output lists the rows in their natural writing order.
        assert_eq!(format!("{:?}", mat), "[[5, 6], [7, 8]]");

        // The `#` modifier puts each row on its own line, but keeps every
        // individual element inline.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [5, 6],
    [7, 8],
]
"
            .trim()
        );
    }

    #[test]
    fn display_alignment() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.to_string(), "| 1 2 |\n| 3 4 |\n");

        // Each column is padded to the width of its longest value.
        let mat = Matrix::from_rows([[1, 200], [30, 4]]);
        assert_eq!(mat.to_string(), "|  1 200 |\n| 30   4 |\n");

        let mat = Matrix::from_rows([[-1.5, 2.0], [3.25, 4.0]]);
        assert_eq!(mat.to_string(), "| -1.5 2 |\n| 3.25 4 |\n");
    }

    #[test]
    fn constants() {
        assert_eq!(Mat2f::ZERO, Matrix::from_rows([[0.0, 0.0], [0.0, 0.0]]));
        assert_eq!(Mat2f::IDENTITY, Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]));

        // Identity of a non-square matrix carries the partial diagonal.
        assert_eq!(
            Mat2x3::<i32>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]]),
        );
    }

    #[test]
    fn checked_access() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.get(1, 1), Some(&4));
        assert_eq!(mat.get(2, 0), None);
        assert_eq!(mat.get(0, 2), None);
        assert_eq!(mat.get_mut(2, 2), None);

        *mat.get_mut(0, 1).unwrap() = 9;
        assert_eq!(mat, Matrix::from_rows([[1, 9], [3, 4]]));
    }

    #[test]
    fn set_row() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        mat.set_row(0, &[5, 6]).unwrap();
        assert_eq!(mat, Matrix::from_rows([[5, 6], [3, 4]]));

        assert_eq!(
            mat.set_row(2, &[5, 6]),
            Err(Error::OutOfBounds {
                index: 2,
                extent: 2
            }),
        );
        assert_eq!(
            mat.set_row(0, &[5, 6, 7]),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 3
            }),
        );
        // Failed calls leave the matrix unchanged.
        assert_eq!(mat, Matrix::from_rows([[5, 6], [3, 4]]));
    }

    #[test]
    fn set_col() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        mat.set_col(1, &[7, 8]).unwrap();
        assert_eq!(mat, Matrix::from_rows([[1, 7, 3], [4, 8, 6]]));

        assert_eq!(
            mat.set_col(3, &[7, 8]),
            Err(Error::OutOfBounds {
                index: 3,
                extent: 3
            }),
        );
        assert_eq!(
            mat.set_col(0, &[7]),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 1
            }),
        );
        assert_eq!(mat, Matrix::from_rows([[1, 7, 3], [4, 8, 6]]));
    }

    #[test]
    fn add_sub() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!((a + b) - b, a);
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
    }

    #[test]
    fn scalar_mul() {
        let a = Matrix::from_rows([[1, -2], [3, 4]]);
        assert_eq!(2 * a, Matrix::from_rows([[2, -4], [6, 8]]));
        assert_eq!(a * 2, 2 * a);
        assert_eq!(1 * a, a);
        assert_eq!(0 * a, Matrix::ZERO);
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[1, 2], [3, 4]]);
        let out = mat * vec2(5, 6);
        assert_eq!(out, [1 * 5 + 2 * 6, 3 * 5 + 4 * 6]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Mat3x2::from_rows([
            [1, 2],
            [3, 4],
            [5, 6],
        ]);
        #[rustfmt::skip]
        let b = Mat2x3::from_rows([
            [7,  8,  9],
            [10, 11, 12],
        ]);
        let c = a * b;
        // Spot-check against the hand-computed product.
        assert_eq!(c, Matrix::from_rows([
            [27, 30, 33],
            [61, 68, 75],
            [95, 106, 117],
        ]));
        assert_eq!(c[(1, 2)], a.row(1).dot(b.col(2)));
    }

    #[test]
    fn identity_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1, -2, 3],
            [4, 5, -6],
            [7, 8, 9],
        ]);
        assert_eq!(Matrix::IDENTITY * a, a);
        assert_eq!(a * Matrix::IDENTITY, a);

        let v = vec3(1, -2, 3);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn scaling() {
        let mat = scaling_matrix(vec3(2, 3, 4));

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [2, 0, 0, 0],
            [0, 3, 0, 0],
            [0, 0, 4, 0],
            [0, 0, 0, 1],
        ]));

        assert_eq!(mat * vec4(5, 5, 5, 1), vec4(10, 15, 20, 1));
    }

    #[test]
    fn translation() {
        let mat = translation_matrix(vec3(7, 8, 9));

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0, 0, 7],
            [0, 1, 0, 8],
            [0, 0, 1, 9],
            [0, 0, 0, 1],
        ]));

        // Translating the homogeneous origin yields the offset itself.
        assert_eq!(mat * vec4(0, 0, 0, 1), vec4(7, 8, 9, 1));
    }

    #[test]
    fn translate_point() {
        let mat = translation_matrix(vec3(2.0, 10.0, 2.0));
        let point = vec4(1.0, 1.0, 1.0, 1.0);
        assert_eq!(mat * point, vec4(3.0, 11.0, 3.0, 1.0));

        let mut rng = fastrand::Rng::with_seed(0x4067);
        for _ in 0..20 {
            let offset = Vector::<f64, 3>::from_fn(|_| rng.f64() * 100.0 - 50.0);
            let out = translation_matrix(offset) * vec4(0.0, 0.0, 0.0, 1.0);
            assert_eq!(out, offset.extend(1.0));
        }
    }

    #[test]
    fn approx_cmp() {
        let a = Mat2f::IDENTITY;
        let b = a.map(|elem| elem + 1e-7);
        approx::assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        approx::assert_abs_diff_ne!(a, a * 2.0, epsilon = 1e-6);
    }
}
