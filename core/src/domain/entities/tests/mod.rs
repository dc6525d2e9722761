mod key_record_tests;
mod token_tests;
