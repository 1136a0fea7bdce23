//! Ja-be-Ja partitioning engine.
//!
//! Each node repeatedly looks for a partner to swap colors with so that
//! more of its neighbors share its color. A swap is scored by the sum of
//! squared same-color degrees of both endpoints and accepted through a
//! temperature-softened improvement test, which lets the search climb out
//! of local optima early on and become greedy as the temperature drops.
//!
//! One round visits every node once in graph order; swaps are visible to
//! the nodes visited after them within the same round. After each round
//! the temperature decays geometrically and restarts from its initial
//! value once it falls under [`TEMPERATURE_FLOOR`].
//!
//! # References
//!
//! - Rahimian, Payberah, Girdzijauskas, Jelasity & Haridi (2013),
//!   "JA-BE-JA: A Distributed Algorithm for Balanced Graph Partitioning"

mod annealing;
mod config;
mod runner;
mod selection;

pub use annealing::{AnnealingSchedule, TEMPERATURE_FLOOR};
pub use config::JabejaConfig;
pub use runner::{JabejaResult, JabejaRunner, Phase, Simulation};
pub use selection::{accepts, select_partner, swap_utility, SwapUtility, ALPHA};
