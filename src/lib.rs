//! linsys: solution-kind classification for small linear systems.
//!
//! This crate decides whether a system of two linear equations in two
//! unknowns, or three equations in three unknowns, has no solution,
//! exactly one solution, or infinitely many. 2x2 systems are classified
//! from the determinant and cross terms, 3x3 systems by comparing the
//! ranks of the coefficient and augmented matrices. Around that core sit
//! preset systems, random generation with a requested solution kind,
//! parameter sweeps, and CSV input/output for batch runs.
//!
//! All predicates reduce to "is this quantity zero", so the numeric
//! behavior is controlled by a single zero-tolerance policy: exact
//! comparison for integer coefficients, or an adaptive threshold that
//! absorbs floating-point rounding.
pub mod classifier;
pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod linalg;
pub mod presets;
pub mod system;
