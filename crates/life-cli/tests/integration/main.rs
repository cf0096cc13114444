//! End-to-end tests that spawn the real `life-cli` binary.

mod helpers;

mod batch_test;
mod single_shot_test;
