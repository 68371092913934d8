// Test module for parser
//
// Unit tests for the fixture expression parser and its diagnostics.

mod error_recovery;
mod expr_tests;
mod precedence_tests;
