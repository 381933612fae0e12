//! Block-driven scheduling of the analysis pipeline.

pub mod processor;

pub use processor::BlockProcessor;
