mod generator_tests;
mod lifecycle_tests;
mod selector_tests;
