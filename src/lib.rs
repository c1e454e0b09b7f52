pub mod config;
pub mod dsp;
pub mod error;
pub mod fraction;
pub mod lexer;
pub mod resolver;
pub mod timeline;
pub mod token;

use crate::config::RenderConfig;
use crate::error::TfsError;
use crate::lexer::Lexer;
use crate::timeline::Timeline;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the tfs-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Compile TFS notation into a timeline of note events.
pub fn compile(input: &str, config: &RenderConfig) -> Result<Timeline, TfsError> {
    let tokens = Lexer::new(input).tokenize()?;
    let notes = resolver::resolve(&tokens, config)?;
    Ok(timeline::build(notes))
}

/// Compile and render TFS notation to a WAV byte buffer.
///
/// This is the whole collaborator boundary: the caller hands in a raw text
/// buffer and a configuration, and gets back bytes to persist. Any lex or
/// resolve error aborts the render with no partial output.
pub fn render(input: &str, config: &RenderConfig) -> Result<Vec<u8>, TfsError> {
    let schedule = compile(input, config)?;
    Ok(dsp::renderer::render_wav(&schedule, config)?)
}

/// WASM-exposed: compile TFS notation into a JSON-shaped timeline.
#[wasm_bindgen]
pub fn compile_score(source: &str) -> Result<JsValue, JsValue> {
    let schedule = compile(source, &RenderConfig::default())
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&schedule).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: compile and render TFS notation to a WAV byte array.
#[wasm_bindgen]
pub fn render_wav(source: &str, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    render(source, &RenderConfig::with_sample_rate(sample_rate))
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: compile and render TFS notation to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_samples(source: &str, sample_rate: u32) -> Result<Vec<f32>, JsValue> {
    let config = RenderConfig::with_sample_rate(sample_rate);
    let schedule = compile(source, &config).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let samples = dsp::engine::render(&schedule, &config);
    Ok(samples.iter().map(|&s| s as f32).collect())
}
