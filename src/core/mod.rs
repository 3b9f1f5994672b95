pub mod byline;
pub mod runner;
pub mod stats;
