//! Scan module tests.

mod tokenizer_tests;
