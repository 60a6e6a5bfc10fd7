mod common;
mod symbols_tests;
mod tops_tests;
