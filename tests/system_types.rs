//! Integration tests for the equation and system types and SolutionKind.

use std::str::FromStr;

use linsys::system::{Equation2, Equation3, SolutionKind, System2x2, System3x3};

// ---------------------------------------------------------------------------
// Equation2 / Equation3
// ---------------------------------------------------------------------------

#[test]
fn equation2_construction_and_display() {
    let eq = Equation2::new(2.0, -1.0, 5.0);
    assert_eq!(eq.a, 2.0);
    assert_eq!(eq.b, -1.0);
    assert_eq!(eq.c, 5.0);
    assert_eq!(eq.to_string(), "2x + -1y = 5");
}

#[test]
fn equation3_construction_and_display() {
    let eq = Equation3::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(eq.to_string(), "1x + 2y + 3z = 4");
}

#[test]
fn equation_scaling_multiplies_every_term() {
    let eq = Equation2::new(1.0, -2.0, 3.0);
    let scaled = eq.scaled(-2.0);
    assert_eq!(scaled, Equation2::new(-2.0, 4.0, -6.0));

    let eq3 = Equation3::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(eq3.scaled(0.5), Equation3::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn zero_lhs_ignores_the_constant() {
    assert!(Equation2::new(0.0, 0.0, 7.0).has_zero_lhs());
    assert!(Equation2::new(0.0, 0.0, 0.0).has_zero_lhs());
    assert!(!Equation2::new(0.0, 1e-300, 7.0).has_zero_lhs());
    assert!(Equation3::new(0.0, 0.0, 0.0, 1.0).has_zero_lhs());
    assert!(!Equation3::new(0.0, 0.0, 1.0, 1.0).has_zero_lhs());
}

#[test]
fn finiteness_covers_all_coefficients() {
    assert!(Equation2::new(1.0, 2.0, 3.0).is_finite());
    assert!(!Equation2::new(f64::NAN, 2.0, 3.0).is_finite());
    assert!(!Equation2::new(1.0, 2.0, f64::INFINITY).is_finite());
    assert!(!Equation3::new(1.0, f64::NEG_INFINITY, 3.0, 4.0).is_finite());
}

#[test]
fn largest_abs_covers_the_constant() {
    assert_eq!(Equation2::new(1.0, -2.0, 3.0).largest_abs(), 3.0);
    assert_eq!(Equation3::new(1.0, -8.0, 3.0, 4.0).largest_abs(), 8.0);
}

// ---------------------------------------------------------------------------
// System2x2 / System3x3
// ---------------------------------------------------------------------------

#[test]
fn system_from_rows_matches_explicit_construction() {
    let by_rows = System2x2::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let explicit = System2x2::new(Equation2::new(1.0, 2.0, 3.0), Equation2::new(4.0, 5.0, 6.0));
    assert_eq!(by_rows, explicit);

    let by_rows3 = System3x3::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
    ]);
    assert_eq!(by_rows3.equations[2].d, 12.0);
}

#[test]
fn system_display_joins_equations() {
    let system = System2x2::from_rows([[1.0, 1.0, 1.0], [2.0, 1.0, 2.0]]);
    assert_eq!(system.to_string(), "1x + 1y = 1; 2x + 1y = 2");
}

#[test]
fn coefficient_and_augmented_matrices() {
    let system = System3x3::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
    ]);
    let a = system.coefficient_matrix();
    assert_eq!(a.dim(), (3, 3));
    assert_eq!(a[(1, 2)], 7.0);

    let ab = system.augmented_matrix();
    assert_eq!(ab.dim(), (3, 4));
    assert_eq!(ab[(2, 3)], 12.0);
    // The first three columns agree with the coefficient matrix.
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(ab[(r, c)], a[(r, c)]);
        }
    }
}

#[test]
fn systems_serialize_to_json_and_back() {
    let system = System2x2::from_rows([[1.0, 1.0, 1.0], [1.0, 1.0, 2.0]]);
    let json = serde_json::to_string(&system).unwrap();
    assert!(json.contains("equations"));
    let back: System2x2 = serde_json::from_str(&json).unwrap();
    assert_eq!(system, back);
}

// ---------------------------------------------------------------------------
// SolutionKind
// ---------------------------------------------------------------------------

#[test]
fn solution_kind_display_labels() {
    assert_eq!(SolutionKind::NoSolution.to_string(), "No Solution");
    assert_eq!(SolutionKind::UniqueSolution.to_string(), "One Unique Solution");
    assert_eq!(SolutionKind::InfiniteSolutions.to_string(), "Infinite Solutions");
}

#[test]
fn solution_kind_tokens_are_snake_case() {
    assert_eq!(SolutionKind::NoSolution.as_str(), "no_solution");
    assert_eq!(SolutionKind::UniqueSolution.as_str(), "unique_solution");
    assert_eq!(SolutionKind::InfiniteSolutions.as_str(), "infinite_solutions");
    // serde uses the same tokens
    let json = serde_json::to_string(&SolutionKind::NoSolution).unwrap();
    assert_eq!(json, "\"no_solution\"");
}

#[test]
fn solution_kind_parses_tokens_and_labels() {
    assert_eq!(
        SolutionKind::from_str("no_solution").unwrap(),
        SolutionKind::NoSolution
    );
    assert_eq!(
        SolutionKind::from_str("Unique_Solution").unwrap(),
        SolutionKind::UniqueSolution
    );
    assert_eq!(
        SolutionKind::from_str("Infinite Solutions").unwrap(),
        SolutionKind::InfiniteSolutions
    );
    // Looser historical spellings are accepted too.
    assert_eq!(
        SolutionKind::from_str("One Solution").unwrap(),
        SolutionKind::UniqueSolution
    );
    assert_eq!(
        SolutionKind::from_str("Infinity Solution").unwrap(),
        SolutionKind::InfiniteSolutions
    );
}

#[test]
fn solution_kind_rejects_unknown_names() {
    let err = SolutionKind::from_str("several").unwrap_err();
    assert!(err.contains("Unknown solution kind"), "got: {}", err);
}

#[test]
fn solution_kind_round_trips_through_parse() {
    for kind in [
        SolutionKind::NoSolution,
        SolutionKind::UniqueSolution,
        SolutionKind::InfiniteSolutions,
    ] {
        assert_eq!(SolutionKind::from_str(kind.as_str()).unwrap(), kind);
        assert_eq!(SolutionKind::from_str(&kind.to_string()).unwrap(), kind);
    }
}
