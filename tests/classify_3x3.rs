//! Integration tests for 3x3 classification by rank comparison.

use linsys::classifier::{classify_3x3, LinearSystemClassifier};
use linsys::system::{Equation3, SolutionKind, System3x3};

// ---------------------------------------------------------------------------
// Unique solutions (full rank)
// ---------------------------------------------------------------------------

#[test]
fn axis_planes_meet_in_a_point() {
    // x = 4, y = 5, z = 6.
    let system = System3x3::from_rows([
        [1.0, 0.0, 0.0, 4.0],
        [0.0, 1.0, 0.0, 5.0],
        [0.0, 0.0, 1.0, 6.0],
    ]);
    assert_eq!(classify_3x3(&system).unwrap(), SolutionKind::UniqueSolution);
}

#[test]
fn textbook_system_with_one_solution() {
    // Solved by (x, y, z) = (2, 3, -1).
    let system = System3x3::from_rows([
        [2.0, 1.0, -1.0, 8.0],
        [-3.0, -1.0, 2.0, -11.0],
        [-2.0, 1.0, 2.0, -3.0],
    ]);
    assert_eq!(classify_3x3(&system).unwrap(), SolutionKind::UniqueSolution);
}

// ---------------------------------------------------------------------------
// No solution (augmented rank exceeds coefficient rank)
// ---------------------------------------------------------------------------

#[test]
fn parallel_planes_have_no_solution() {
    let system = System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 2.0],
        [1.0, 1.0, 1.0, 3.0],
    ]);
    assert_eq!(classify_3x3(&system).unwrap(), SolutionKind::NoSolution);
}

#[test]
fn third_plane_parallel_to_the_intersection_line() {
    // x = 0 and y = 0 meet in the z-axis; x + y = 5 never touches it.
    let system = System3x3::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0, 5.0],
    ]);
    assert_eq!(classify_3x3(&system).unwrap(), SolutionKind::NoSolution);
}

#[test]
fn two_parallel_planes_and_a_crossing_one() {
    let system = System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 2.0],
        [1.0, 0.0, 0.0, 4.0],
    ]);
    assert_eq!(classify_3x3(&system).unwrap(), SolutionKind::NoSolution);
}

// ---------------------------------------------------------------------------
// Infinite solutions (consistent, rank below 3)
// ---------------------------------------------------------------------------

#[test]
fn coincident_planes_have_infinite_solutions() {
    let system = System3x3::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [3.0, 6.0, 9.0, 12.0],
    ]);
    assert_eq!(
        classify_3x3(&system).unwrap(),
        SolutionKind::InfiniteSolutions
    );
}

#[test]
fn sheaf_of_planes_through_a_line() {
    // The third plane is the sum of the first two, constants included.
    let system = System3x3::from_rows([
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 2.0],
        [1.0, 1.0, 0.0, 3.0],
    ]);
    assert_eq!(
        classify_3x3(&system).unwrap(),
        SolutionKind::InfiniteSolutions
    );
}

#[test]
fn coincident_pair_cut_by_a_third_plane() {
    let system = System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [2.0, 2.0, 2.0, 2.0],
        [1.0, 0.0, 0.0, 4.0],
    ]);
    assert_eq!(
        classify_3x3(&system).unwrap(),
        SolutionKind::InfiniteSolutions
    );
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

#[test]
fn exact_and_adaptive_agree_on_integer_systems() {
    let exact = LinearSystemClassifier::exact();
    let adaptive = LinearSystemClassifier::default();
    let systems = [
        System3x3::from_rows([
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 2.0],
            [1.0, 1.0, 1.0, 3.0],
        ]),
        System3x3::from_rows([
            [1.0, 1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0, 2.0],
            [3.0, 3.0, 3.0, 3.0],
        ]),
        System3x3::from_rows([
            [2.0, 1.0, -1.0, 8.0],
            [-3.0, -1.0, 2.0, -11.0],
            [-2.0, 1.0, 2.0, -3.0],
        ]),
        System3x3::from_rows([
            [1.0, -2.0, 4.0, 0.0],
            [0.0, 3.0, -1.0, 5.0],
            [1.0, 1.0, 3.0, 5.0],
        ]),
    ];
    for system in &systems {
        assert_eq!(
            exact.classify_3x3(system).unwrap(),
            adaptive.classify_3x3(system).unwrap(),
            "policies disagree on [{}]",
            system
        );
    }
}

#[test]
fn adaptive_default_recovers_float_scaled_planes() {
    // The second plane is 0.3 times the first except for the rounding in
    // 0.1 + 0.2, so exact elimination finds three significant pivots
    // where only two are real.
    let system = System3x3::new(
        Equation3::new(1.0, 2.0, 5.0, 4.0),
        Equation3::new(0.1 + 0.2, 0.6, 1.5, 1.2),
        Equation3::new(0.0, 1.0, 0.0, 2.0),
    );

    let adaptive = LinearSystemClassifier::default();
    assert_eq!(
        adaptive.classify_3x3(&system).unwrap(),
        SolutionKind::InfiniteSolutions
    );

    let exact = LinearSystemClassifier::exact();
    assert_eq!(
        exact.classify_3x3(&system).unwrap(),
        SolutionKind::UniqueSolution
    );
}

#[test]
fn adaptive_policy_holds_at_larger_magnitudes() {
    // The proportional-plane geometry above scaled by ten. Elimination
    // residues now reach ~1e-12, past any fixed absolute floor, and must
    // instead be measured against the products they were cancelled from.
    let system = System3x3::new(
        Equation3::new(10.0, 20.0, 50.0, 40.0),
        Equation3::new((0.1 + 0.2) * 10.0, 6.0, 15.0, 12.0),
        Equation3::new(0.0, 10.0, 0.0, 20.0),
    );

    let adaptive = LinearSystemClassifier::default();
    assert_eq!(
        adaptive.classify_3x3(&system).unwrap(),
        SolutionKind::InfiniteSolutions
    );

    let exact = LinearSystemClassifier::exact();
    assert_eq!(
        exact.classify_3x3(&system).unwrap(),
        SolutionKind::UniqueSolution
    );
}

#[test]
fn large_constants_do_not_mask_an_inconsistency() {
    // Two parallel planes and a third crossing them, with constants nine
    // orders of magnitude above the coefficients. The constants column
    // must not set the zero threshold for the coefficient columns, or
    // the left-hand side would be read as all zero.
    let system = System3x3::from_rows([
        [1.0, 1.0, 1.0, 1e10],
        [1.0, 1.0, 1.0, 2e10],
        [1.0, 2.0, 1.0, 3e10],
    ]);

    let adaptive = LinearSystemClassifier::default();
    assert_eq!(
        adaptive.classify_3x3(&system).unwrap(),
        SolutionKind::NoSolution
    );

    // All quantities stay exactly representable, so both policies agree.
    let exact = LinearSystemClassifier::exact();
    assert_eq!(
        exact.classify_3x3(&system).unwrap(),
        SolutionKind::NoSolution
    );
}

#[test]
fn free_function_uses_the_default_policy() {
    let system = System3x3::from_rows([
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 2.0],
        [1.0, 1.0, 1.0, 3.0],
    ]);
    let classifier = LinearSystemClassifier::default();
    assert_eq!(
        classify_3x3(&system).unwrap(),
        classifier.classify_3x3(&system).unwrap()
    );
}
