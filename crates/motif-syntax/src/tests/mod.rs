//! Unit tests for `motif_syntax`.

mod tokenizer_tests;
