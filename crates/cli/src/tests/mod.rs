mod helpers_tests;
mod parse_tests;
