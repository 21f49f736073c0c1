//! Numerical root finding for the orthopara property library.

pub mod bisection;
