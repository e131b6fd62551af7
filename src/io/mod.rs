//! Reading and writing systems as delimited text files.
//!
//! This module contains a small CSV adapter for loading batches of
//! systems and for writing them back out together with their
//! classification.
pub mod systems_csv;
