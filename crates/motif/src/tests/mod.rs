//! Unit tests for the `motif` facade.
