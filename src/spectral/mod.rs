//! Frequency-domain transform stage and the spectral-edit hook.

pub mod transform;

pub use transform::{Passthrough, SpectralEdit, SpectralStage};
