//! Integration tests for tblsort.


mod arg_tests;
mod invalid_config_tests;
mod sort_tests;
mod valid_config_tests;
