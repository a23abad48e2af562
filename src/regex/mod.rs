//! Compiled regular expressions shared across calls

mod cache;
