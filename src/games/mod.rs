//! Game implementations.

pub mod klondike;
