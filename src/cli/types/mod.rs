//! Argument types that need custom parsing.

pub mod rating;

pub use rating::RatingArg;
