//! Unit tests for `motif_core`.

mod equality_tests;
mod outcome_tests;

mod behaviour;
