//! Small hand-picked systems, one per solution kind, useful as starting
//! points for demos and as fixed test inputs. All coefficients are small
//! integers, so they classify identically under the exact and adaptive
//! policies.

use crate::system::{SolutionKind, System2x2, System3x3};

/// Two parallel lines: `x + y = 1` and `x + y = 2`.
pub fn no_solution_2x2() -> System2x2 {
    System2x2::from_rows([[1.0, 1.0, 1.0], [1.0, 1.0, 2.0]])
}

/// Two coincident lines: `x + y = 1` and its doubling `2x + 2y = 2`.
pub fn infinite_solutions_2x2() -> System2x2 {
    System2x2::from_rows([[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]])
}

/// Two crossing lines: `x + y = 1` and `2x + y = 2`.
pub fn unique_solution_2x2() -> System2x2 {
    System2x2::from_rows([[1.0, 1.0, 1.0], [2.0, 1.0, 2.0]])
}

/// The system shown before any preset is chosen; same as
/// [`no_solution_2x2`].
pub fn default_2x2() -> System2x2 {
    no_solution_2x2()
}

/// Three parallel planes: `x + y + z` equal to 1, 2 and 3.
pub fn no_solution_3x3() -> System3x3 {
    System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 2.0],
        [1.0, 1.0, 1.0, 3.0],
    ])
}

/// Three coincident planes: `x + y + z = 1` scaled by 1, 2 and 3.
pub fn infinite_solutions_3x3() -> System3x3 {
    System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [2.0, 2.0, 2.0, 2.0],
        [3.0, 3.0, 3.0, 3.0],
    ])
}

/// Three planes meeting in a single point.
pub fn unique_solution_3x3() -> System3x3 {
    System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [2.0, 1.0, 1.0, 2.0],
        [1.0, 2.0, 1.0, 3.0],
    ])
}

/// The system shown before any preset is chosen; same as
/// [`no_solution_3x3`].
pub fn default_3x3() -> System3x3 {
    no_solution_3x3()
}

/// Returns the 2x2 preset that classifies as `kind`.
pub fn preset_2x2(kind: SolutionKind) -> System2x2 {
    match kind {
        SolutionKind::NoSolution => no_solution_2x2(),
        SolutionKind::InfiniteSolutions => infinite_solutions_2x2(),
        SolutionKind::UniqueSolution => unique_solution_2x2(),
    }
}

/// Returns the 3x3 preset that classifies as `kind`.
pub fn preset_3x3(kind: SolutionKind) -> System3x3 {
    match kind {
        SolutionKind::NoSolution => no_solution_3x3(),
        SolutionKind::InfiniteSolutions => infinite_solutions_3x3(),
        SolutionKind::UniqueSolution => unique_solution_3x3(),
    }
}

/// All 2x2 presets paired with the kind each one classifies as.
pub fn labeled_2x2() -> Vec<(SolutionKind, System2x2)> {
    vec![
        (SolutionKind::NoSolution, no_solution_2x2()),
        (SolutionKind::InfiniteSolutions, infinite_solutions_2x2()),
        (SolutionKind::UniqueSolution, unique_solution_2x2()),
    ]
}

/// All 3x3 presets paired with the kind each one classifies as.
pub fn labeled_3x3() -> Vec<(SolutionKind, System3x3)> {
    vec![
        (SolutionKind::NoSolution, no_solution_3x3()),
        (SolutionKind::InfiniteSolutions, infinite_solutions_3x3()),
        (SolutionKind::UniqueSolution, unique_solution_3x3()),
    ]
}
