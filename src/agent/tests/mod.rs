//! Unit tests for the public agent module.
