use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::trace;

use super::equation::Equation;
use crate::error::SolverError;
use crate::math::Tolerant;
use crate::shapes::Line;

/// Unknown name to value. Empty when the system has no unique solution.
pub type Solution = BTreeMap<String, f64>;

/// An ordered set of linear equations over named unknowns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearEquationSystem {
    equations: Vec<Equation>,
}

impl LinearEquationSystem {
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// Equates two lines component-wise, `a` parameterized by `name_a` and `b`
    /// by `name_b`: one equation for x, one for y.
    pub fn from_lines(a: &Line, name_a: &str, b: &Line, name_b: &str) -> Self {
        Self::new(vec![
            Equation::new(a.x_segments(name_a), b.x_segments(name_b)),
            Equation::new(a.y_segments(name_a), b.y_segments(name_b)),
        ])
    }

    pub fn push(&mut self, equation: Equation) {
        self.equations.push(equation);
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    pub fn all_unknowns(&self) -> BTreeSet<String> {
        self.equations.iter().flat_map(Equation::unknowns).collect()
    }

    /// Every equation normalized over the union of all unknowns, so each row
    /// lists the same unknowns in the same order.
    pub fn normalize(&self) -> Self {
        let unknowns = self.all_unknowns();
        Self::new(
            self.equations
                .iter()
                .map(|e| e.normalize_with(&unknowns))
                .collect(),
        )
    }

    /// Gaussian elimination with per-column pivoting and back-substitution.
    ///
    /// A singular system (no usable pivot in some column) yields an empty
    /// [`Solution`]. An empty or non-square system is an error.
    pub fn solve_gaussian(&self) -> Result<Solution, SolverError> {
        if self.equations.is_empty() {
            return Err(SolverError::NoEquations);
        }

        let unknowns: Vec<String> = self.all_unknowns().into_iter().collect();
        let n = self.equations.len();
        if unknowns.len() != n {
            return Err(SolverError::NotSquare {
                equations: n,
                unknowns: unknowns.len(),
            });
        }

        // n rows of n coefficients followed by the constant
        let mut matrix: Vec<Vec<f64>> = self
            .normalize()
            .equations
            .iter()
            .map(|e| e.segments().map(|s| s.factor()).collect())
            .collect();

        for col in 0..n {
            if Tolerant(matrix[col][col]).is_zero() {
                match (col + 1..n).find(|&row| !Tolerant(matrix[row][col]).is_zero()) {
                    Some(row) => matrix.swap(col, row),
                    None => {
                        trace!("singular system, no pivot for column {col}");
                        return Ok(Solution::new());
                    }
                }
            }

            let dest_factor = matrix[col][col];
            for dest in col + 1..n {
                let src_factor = matrix[dest][col];
                for i in 0..=n {
                    matrix[dest][i] = matrix[dest][i] * dest_factor - matrix[col][i] * src_factor;
                }
            }
        }

        for row in (0..n).rev() {
            let diagonal = matrix[row][row];
            if Tolerant(diagonal).is_zero() {
                trace!("singular system, zero diagonal in row {row}");
                return Ok(Solution::new());
            }
            for value in matrix[row].iter_mut() {
                *value /= diagonal;
            }
            let constant = matrix[row][n];
            for dest in 0..row {
                matrix[dest][n] -= matrix[dest][row] * constant;
                matrix[dest][row] = 0.0;
            }
        }

        Ok(unknowns
            .into_iter()
            .zip(matrix.iter().map(|row| row[n]))
            .collect())
    }
}

impl fmt::Display for LinearEquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, equation) in self.equations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{equation}")?;
        }
        Ok(())
    }
}

impl FromIterator<Equation> for LinearEquationSystem {
    fn from_iter<I: IntoIterator<Item = Equation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
