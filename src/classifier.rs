use crate::config::ZeroTolerance;
use crate::error::ClassifyError;
use crate::linalg;
use crate::system::{SolutionKind, System2x2, System3x3};

/// Classifies linear systems by solution kind.
///
/// A 2x2 system is decided from the sign structure of its determinant and
/// cross terms; a 3x3 system from the ranks of its coefficient and
/// augmented matrices. The classifier itself holds only the zero-test
/// policy, so it is cheap to construct and to copy around.
#[derive(Debug, Clone, Default)]
pub struct LinearSystemClassifier {
    tolerance: ZeroTolerance,
}

impl LinearSystemClassifier {
    /// Creates a classifier with the given zero-test policy.
    pub fn new(tolerance: ZeroTolerance) -> Self {
        LinearSystemClassifier { tolerance }
    }

    /// Creates a classifier that compares against zero with `== 0.0`,
    /// matching pen-and-paper arithmetic on integer coefficients.
    pub fn exact() -> Self {
        LinearSystemClassifier::new(ZeroTolerance::Exact)
    }

    /// Returns the zero-test policy this classifier applies.
    pub fn tolerance(&self) -> ZeroTolerance {
        self.tolerance
    }

    /// Classifies a system of two equations in two unknowns.
    ///
    /// The determinant `a1*b2 - a2*b1` decides between one solution and
    /// none/infinitely many; in the singular case the cross terms
    /// `c1*b2 - c2*b1` and `a1*c2 - a2*c1` separate coincident lines
    /// (both zero) from parallel lines (either nonzero).
    ///
    /// # Arguments
    ///
    /// * `system` - The system to classify.
    ///
    /// # Returns
    ///
    /// * `Ok(SolutionKind)` with the classification, or a
    ///   [`ClassifyError`] if the system fails validation.
    pub fn classify_2x2(&self, system: &System2x2) -> Result<SolutionKind, ClassifyError> {
        system.validate()?;

        let [e1, e2] = &system.equations;
        let det = e1.a * e2.b - e2.a * e1.b;
        let det_scale = (e1.a * e2.b).abs() + (e2.a * e1.b).abs();
        if !self.tolerance.is_zero(det, det_scale) {
            log::trace!("2x2 [{}]: determinant {} is nonzero", system, det);
            return Ok(SolutionKind::UniqueSolution);
        }

        let cx = e1.c * e2.b - e2.c * e1.b;
        let cx_scale = (e1.c * e2.b).abs() + (e2.c * e1.b).abs();
        let cy = e1.a * e2.c - e2.a * e1.c;
        let cy_scale = (e1.a * e2.c).abs() + (e2.a * e1.c).abs();
        let kind = if self.tolerance.is_zero(cx, cx_scale) && self.tolerance.is_zero(cy, cy_scale)
        {
            SolutionKind::InfiniteSolutions
        } else {
            SolutionKind::NoSolution
        };
        log::trace!(
            "2x2 [{}]: singular, cross terms {} and {} -> {}",
            system,
            cx,
            cy,
            kind
        );
        Ok(kind)
    }

    /// Classifies a system of three equations in three unknowns.
    ///
    /// Compares the rank of the coefficient matrix `A` with the rank of
    /// the augmented matrix `[A | d]`: a rank increase means the constants
    /// are inconsistent with the coefficients (no solution), full rank
    /// means one solution, anything else leaves free variables.
    ///
    /// # Arguments
    ///
    /// * `system` - The system to classify.
    ///
    /// # Returns
    ///
    /// * `Ok(SolutionKind)` with the classification, or a
    ///   [`ClassifyError`] if the system fails validation.
    pub fn classify_3x3(&self, system: &System3x3) -> Result<SolutionKind, ClassifyError> {
        system.validate()?;

        let coefficients = system.coefficient_matrix();
        let augmented = system.augmented_matrix();
        let rank_a = linalg::rank(&coefficients, &self.tolerance);
        let rank_ab = linalg::rank(&augmented, &self.tolerance);
        log::trace!(
            "3x3 [{}]: rank(A) = {}, rank([A|d]) = {}",
            system,
            rank_a,
            rank_ab
        );

        if rank_a < rank_ab {
            Ok(SolutionKind::NoSolution)
        } else if rank_a == 3 {
            Ok(SolutionKind::UniqueSolution)
        } else {
            Ok(SolutionKind::InfiniteSolutions)
        }
    }
}

/// Classifies a 2x2 system with the default adaptive tolerance.
///
/// Convenience wrapper over [`LinearSystemClassifier::classify_2x2`].
pub fn classify_2x2(system: &System2x2) -> Result<SolutionKind, ClassifyError> {
    LinearSystemClassifier::default().classify_2x2(system)
}

/// Classifies a 3x3 system with the default adaptive tolerance.
///
/// Convenience wrapper over [`LinearSystemClassifier::classify_3x3`].
pub fn classify_3x3(system: &System3x3) -> Result<SolutionKind, ClassifyError> {
    LinearSystemClassifier::default().classify_3x3(system)
}
