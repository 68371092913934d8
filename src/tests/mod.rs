// Test module for the battery runner

mod reporter_tests;
