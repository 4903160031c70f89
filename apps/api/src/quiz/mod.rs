// Quiz pipeline: question bank, answer/recommendation stores, scoring, submission.
// Scoring is a pure function of stored answers; stores are a cache of its output.

pub mod handlers;
pub mod locks;
pub mod questions;
pub mod scoring;
pub mod store;
pub mod submission;
