use crate::error::ClassifyError;
use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest coefficient magnitude classification accepts.
///
/// Classification multiplies coefficients together, and the augmented
/// elimination forms sums of products of up to four inputs. Keeping
/// every input at or below this bound keeps every such intermediate
/// below `f64::MAX`, so the zero tests never see an infinity or NaN
/// produced by overflow.
pub const MAX_COEFFICIENT: f64 = 1e75;

/// A linear equation in two unknowns, `a*x + b*y = c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Equation2 {
    /// Creates a new equation `a*x + b*y = c`.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Equation2 { a, b, c }
    }

    /// Returns true if every coefficient (including the constant) is finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// Returns the largest coefficient magnitude, constant included.
    pub fn largest_abs(&self) -> f64 {
        self.a.abs().max(self.b.abs()).max(self.c.abs())
    }

    /// Returns true if both left-hand-side coefficients are exactly zero.
    ///
    /// Such an equation describes no line: it is either the tautology
    /// `0 = 0` or the contradiction `0 = c`. The test is deliberately
    /// exact, never tolerance-based, so that tiny but genuine
    /// coefficients are not rejected as degenerate.
    pub fn has_zero_lhs(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Returns a copy of the equation with every term multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Equation2 {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
        }
    }
}

impl fmt::Display for Equation2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x + {}y = {}", self.a, self.b, self.c)
    }
}

/// A linear equation in three unknowns, `a*x + b*y + c*z = d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equation3 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Equation3 {
    /// Creates a new equation `a*x + b*y + c*z = d`.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Equation3 { a, b, c, d }
    }

    /// Returns true if every coefficient (including the constant) is finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// Returns the largest coefficient magnitude, constant included.
    pub fn largest_abs(&self) -> f64 {
        self.a
            .abs()
            .max(self.b.abs())
            .max(self.c.abs())
            .max(self.d.abs())
    }

    /// Returns true if all three left-hand-side coefficients are exactly zero.
    pub fn has_zero_lhs(&self) -> bool {
        self.a == 0.0 && self.b == 0.0 && self.c == 0.0
    }

    /// Returns a copy of the equation with every term multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Equation3 {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
            d: self.d * k,
        }
    }
}

impl fmt::Display for Equation3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x + {}y + {}z = {}", self.a, self.b, self.c, self.d)
    }
}

/// A system of two linear equations in two unknowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct System2x2 {
    pub equations: [Equation2; 2],
}

impl System2x2 {
    /// Creates a new system from two equations.
    pub fn new(first: Equation2, second: Equation2) -> Self {
        System2x2 {
            equations: [first, second],
        }
    }

    /// Creates a system from coefficient rows `[a, b, c]`, one per equation.
    pub fn from_rows(rows: [[f64; 3]; 2]) -> Self {
        System2x2 {
            equations: [
                Equation2::new(rows[0][0], rows[0][1], rows[0][2]),
                Equation2::new(rows[1][0], rows[1][1], rows[1][2]),
            ],
        }
    }

    /// Checks the system for inputs classification cannot handle.
    ///
    /// # Returns
    ///
    /// * `Err(ClassifyError::NonFiniteCoefficient)` if any coefficient is
    ///   NaN or infinite.
    /// * `Err(ClassifyError::OversizedCoefficient)` if a coefficient
    ///   magnitude exceeds [`MAX_COEFFICIENT`].
    /// * `Err(ClassifyError::DegenerateEquation)` if an equation has an
    ///   all-zero left-hand side.
    /// * `Ok(())` otherwise. Equation indices in errors are 1-based.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        for (idx, eq) in self.equations.iter().enumerate() {
            if !eq.is_finite() {
                return Err(ClassifyError::NonFiniteCoefficient { equation: idx + 1 });
            }
        }
        for (idx, eq) in self.equations.iter().enumerate() {
            if eq.largest_abs() > MAX_COEFFICIENT {
                return Err(ClassifyError::OversizedCoefficient { equation: idx + 1 });
            }
        }
        for (idx, eq) in self.equations.iter().enumerate() {
            if eq.has_zero_lhs() {
                return Err(ClassifyError::DegenerateEquation { equation: idx + 1 });
            }
        }
        Ok(())
    }
}

impl fmt::Display for System2x2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}; {}", self.equations[0], self.equations[1])
    }
}

/// A system of three linear equations in three unknowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct System3x3 {
    pub equations: [Equation3; 3],
}

impl System3x3 {
    /// Creates a new system from three equations.
    pub fn new(first: Equation3, second: Equation3, third: Equation3) -> Self {
        System3x3 {
            equations: [first, second, third],
        }
    }

    /// Creates a system from coefficient rows `[a, b, c, d]`, one per equation.
    pub fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        System3x3 {
            equations: [
                Equation3::new(rows[0][0], rows[0][1], rows[0][2], rows[0][3]),
                Equation3::new(rows[1][0], rows[1][1], rows[1][2], rows[1][3]),
                Equation3::new(rows[2][0], rows[2][1], rows[2][2], rows[2][3]),
            ],
        }
    }

    /// Checks the system for inputs classification cannot handle.
    ///
    /// Same contract as [`System2x2::validate`]: non-finite coefficients
    /// are reported first, then oversized ones, then degenerate
    /// equations, with 1-based indices.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        for (idx, eq) in self.equations.iter().enumerate() {
            if !eq.is_finite() {
                return Err(ClassifyError::NonFiniteCoefficient { equation: idx + 1 });
            }
        }
        for (idx, eq) in self.equations.iter().enumerate() {
            if eq.largest_abs() > MAX_COEFFICIENT {
                return Err(ClassifyError::OversizedCoefficient { equation: idx + 1 });
            }
        }
        for (idx, eq) in self.equations.iter().enumerate() {
            if eq.has_zero_lhs() {
                return Err(ClassifyError::DegenerateEquation { equation: idx + 1 });
            }
        }
        Ok(())
    }

    /// Returns the 3x3 coefficient matrix `A`.
    pub fn coefficient_matrix(&self) -> Array2<f64> {
        let [e1, e2, e3] = &self.equations;
        arr2(&[
            [e1.a, e1.b, e1.c],
            [e2.a, e2.b, e2.c],
            [e3.a, e3.b, e3.c],
        ])
    }

    /// Returns the 3x4 augmented matrix `[A | d]`.
    pub fn augmented_matrix(&self) -> Array2<f64> {
        let [e1, e2, e3] = &self.equations;
        arr2(&[
            [e1.a, e1.b, e1.c, e1.d],
            [e2.a, e2.b, e2.c, e2.d],
            [e3.a, e3.b, e3.c, e3.d],
        ])
    }
}

impl fmt::Display for System3x3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}; {}; {}",
            self.equations[0], self.equations[1], self.equations[2]
        )
    }
}

/// The solution kind of a consistent-or-not linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionKind {
    /// The equations are inconsistent; no assignment satisfies all of them.
    NoSolution,
    /// Exactly one assignment satisfies the system.
    UniqueSolution,
    /// The solution set is a line or plane of assignments.
    InfiniteSolutions,
}

impl SolutionKind {
    /// Returns the snake_case token used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionKind::NoSolution => "no_solution",
            SolutionKind::UniqueSolution => "unique_solution",
            SolutionKind::InfiniteSolutions => "infinite_solutions",
        }
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            SolutionKind::NoSolution => "No Solution",
            SolutionKind::UniqueSolution => "One Unique Solution",
            SolutionKind::InfiniteSolutions => "Infinite Solutions",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for SolutionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no_solution" | "no solution" | "none" => Ok(SolutionKind::NoSolution),
            "unique_solution" | "one unique solution" | "one solution" | "unique" => {
                Ok(SolutionKind::UniqueSolution)
            }
            "infinite_solutions" | "infinite solutions" | "infinity solution" | "infinite" => {
                Ok(SolutionKind::InfiniteSolutions)
            }
            _ => Err(format!(
                "Unknown solution kind: {}. Expected 'no_solution', 'unique_solution' or 'infinite_solutions'",
                s
            )),
        }
    }
}
