//! Solve nonogram (picross) puzzles by deduction over the permutations of every row and column

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod puzzle;
pub mod render;
pub mod solve;
