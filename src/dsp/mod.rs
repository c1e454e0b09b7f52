//! DSP engine — pure Rust sample synthesis and WAV encoding.
//!
//! All DSP runs in Rust for deterministic, cross-platform audio output.
//! The same code powers both native callers and the WASM bindings.

pub mod engine;
pub mod oscillator;
pub mod renderer;
