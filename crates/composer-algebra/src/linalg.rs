//! Dense matrices over a ring.
//!
//! This is the storage behind [`crate::Morphism`]: row-major scalars over
//! one ring and a matrix-vector product. Nothing more is needed for the
//! elementary maps.

use crate::error::{AlgebraError, Result};
use crate::ring::Ring;
use crate::scalar::Scalar;

/// A `rows × cols` matrix with entries in one ring.
///
/// ```
/// use composer_algebra::{Matrix, Ring, Scalar};
///
/// let z = Ring::integers();
/// let m = Matrix::from_rows(&z, vec![
///     vec![Scalar::integer(1), Scalar::integer(2)],
///     vec![Scalar::integer(3), Scalar::integer(4)],
/// ]).unwrap();
/// let y = m.apply(&[Scalar::integer(1), Scalar::integer(1)]).unwrap();
/// assert_eq!(y, vec![Scalar::integer(3), Scalar::integer(7)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    ring: Ring,
    rows: usize,
    cols: usize,
    entries: Vec<Scalar>,
}

impl Matrix {
    /// The zero matrix.
    #[must_use]
    pub fn zero(ring: &Ring, rows: usize, cols: usize) -> Self {
        Self {
            ring: ring.clone(),
            rows,
            cols,
            entries: vec![ring.zero(); rows * cols],
        }
    }

    /// The `n × n` identity.
    #[must_use]
    pub fn identity(ring: &Ring, n: usize) -> Self {
        let mut m = Self::zero(ring, n, n);
        for i in 0..n {
            m.entries[i * n + i] = ring.one();
        }
        m
    }

    /// A matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for ragged rows and
    /// [`AlgebraError::DomainMismatch`] for an entry outside `ring`.
    pub fn from_rows(ring: &Ring, rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n = rows.len();
        let mut entries = Vec::with_capacity(n * cols);
        for row in rows {
            if row.len() != cols {
                return Err(AlgebraError::DimensionMismatch {
                    expected: cols,
                    received: row.len(),
                });
            }
            if let Some(bad) = row.iter().find(|s| s.ring() != *ring) {
                return Err(AlgebraError::mismatch(ring.clone(), bad.ring()));
            }
            entries.extend(row);
        }
        Ok(Self {
            ring: ring.clone(),
            rows: n,
            cols,
            entries,
        })
    }

    /// The entry ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Scalar> {
        if row < self.rows && col < self.cols {
            self.entries.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Sets an entry; out-of-range positions are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Scalar) {
        if row < self.rows && col < self.cols {
            self.entries[row * self.cols + col] = value;
        }
    }

    /// Matrix-vector product `A·x`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if `x` does not have
    /// `cols` entries, and [`AlgebraError::DomainMismatch`] if an entry of
    /// `x` is outside the matrix ring.
    pub fn apply(&self, x: &[Scalar]) -> Result<Vec<Scalar>> {
        if x.len() != self.cols {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.cols,
                received: x.len(),
            });
        }
        (0..self.rows)
            .map(|r| {
                let row = &self.entries[r * self.cols..(r + 1) * self.cols];
                row.iter().zip(x).try_fold(self.ring.zero(), |mut acc, (a, b)| {
                    acc.add_assign(&a.product(b)?)?;
                    Ok::<_, AlgebraError>(acc)
                })
            })
            .collect()
    }
}
