//! Integration tests for path assertions

mod content;
mod digests;
mod directories;
mod paths;
mod support;
