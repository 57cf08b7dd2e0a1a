//! Game implementations.

pub mod archaemania;
