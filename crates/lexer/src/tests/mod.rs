// Test module for lexer
//
// Unit tests for the fixture lexer, organized by token category.
