//! The Coordinator drives every panel from one polling tick and arbitrates
//! sidebar exclusivity.

mod operations;
mod tick;
mod types;

pub use types::*;

#[cfg(test)]
mod tests;
