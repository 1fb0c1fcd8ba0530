// src/agents/mod.rs
// The four creative agents and the pipeline that sequences them

pub mod creative;
pub mod design;
pub mod pipeline;
pub mod platform;
pub mod templates;
pub mod tone;
pub mod types;
pub mod variation;

pub use pipeline::{AGENT_NAMES, AdPipeline, GenerateResult, Refinement};
pub use types::{AdCopy, AdImage, Brief, Tone, Variation};
