// Compliance heuristics and the scores derived from them.

pub mod checks;
pub mod handlers;
pub mod scoring;
