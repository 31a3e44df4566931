//! Named correlation matrices and triangle masks

use serde::{Deserialize, Serialize};
use std::fmt;
use survey_core::{Error, Result};

/// Square, symmetric matrix of pairwise correlations
///
/// A `None` cell means the correlation is undefined for that pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct CorrelationMatrix {
    names: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Build a matrix, checking that `cells` is `names.len()` square
    pub fn new(names: Vec<String>, cells: Vec<Vec<Option<f64>>>) -> Result<Self> {
        if cells.len() != names.len() {
            return Err(Error::size_mismatch(names.len(), cells.len(), "correlation rows"));
        }
        if let Some(row) = cells.iter().find(|row| row.len() != names.len()) {
            return Err(Error::size_mismatch(names.len(), row.len(), "correlation columns"));
        }
        Ok(Self { names, cells })
    }

    /// Feature names, in row/column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of features
    pub fn dim(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Cell for a pair of feature names
    pub fn get_named(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.position(row)?;
        let j = self.position(col)?;
        self.get(i, j)
    }

    /// Position of a feature name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Rows of the matrix
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.cells
    }

    /// True when every cell equals its transpose
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim()).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }
}

#[derive(Deserialize)]
struct RawMatrix {
    names: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl TryFrom<RawMatrix> for CorrelationMatrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::new(raw.names, raw.cells)
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, row) in self.names.iter().zip(&self.cells) {
            write!(f, "{name:>12}")?;
            for cell in row {
                match cell {
                    Some(r) => write!(f, " {r:>6.2}")?,
                    None => write!(f, " {:>6}", "NaN")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Which half of a square matrix a mask suppresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triangle {
    /// `col >= row`
    Upper,
    /// `col <= row`
    Lower,
}

/// N×N boolean mask; `true` cells are suppressed when rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMask")]
pub struct TriangleMask {
    triangle: Triangle,
    cells: Vec<Vec<bool>>,
}

impl TriangleMask {
    /// Upper triangle including the diagonal
    pub fn upper(n: usize) -> Self {
        Self::build(n, Triangle::Upper)
    }

    /// Lower triangle including the diagonal
    pub fn lower(n: usize) -> Self {
        Self::build(n, Triangle::Lower)
    }

    fn build(n: usize, triangle: Triangle) -> Self {
        let cells = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| match triangle {
                        Triangle::Upper => col >= row,
                        Triangle::Lower => col <= row,
                    })
                    .collect()
            })
            .collect();
        Self { triangle, cells }
    }

    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    pub fn dim(&self) -> usize {
        self.cells.len()
    }

    /// Whether (row, col) is suppressed; out-of-range cells are not
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Number of suppressed cells, always N(N+1)/2
    pub fn count_suppressed(&self) -> usize {
        self.cells.iter().flatten().filter(|&&m| m).count()
    }
}

#[derive(Deserialize)]
struct RawMask {
    triangle: Triangle,
    cells: Vec<Vec<bool>>,
}

impl TryFrom<RawMask> for TriangleMask {
    type Error = Error;

    /// Cells must be exactly the requested triangle of an N×N matrix
    fn try_from(raw: RawMask) -> Result<Self> {
        let mask = Self::build(raw.cells.len(), raw.triangle);
        if mask.cells != raw.cells {
            return Err(Error::InvalidInput(format!(
                "Mask cells are not the {:?} triangle of a {n}x{n} matrix",
                raw.triangle,
                n = raw.cells.len()
            )));
        }
        Ok(mask)
    }
}
