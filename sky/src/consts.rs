//! Asset paths and fixed strings shared by the engine shim.

// ── Engine assets ───────────────────────────────────────────────

/// Loader script that defines the global `StelWebEngine` entry point.
pub const ENGINE_SCRIPT_URL: &str = "/stellarium-web-engine/build/stellarium-web-engine.js";

/// WebAssembly binary handed to the loader.
pub const ENGINE_WASM_URL: &str = "/stellarium-web-engine/build/stellarium-web-engine.wasm";

/// Name of the global function installed by the loader script.
pub const ENGINE_GLOBAL: &str = "StelWebEngine";

/// Base URL under which all sky data sources live.
pub const SKY_DATA_BASE_URL: &str = "/test-skydata/";

/// Scale applied to both registered fonts.
pub const FONT_SCALE: f64 = 1.38;

// ── Naming ──────────────────────────────────────────────────────

/// Prefix the engine puts on common-name designations.
pub const NAME_PREFIX: &str = "NAME ";

/// Placeholder shown when an object has no usable name.
pub const UNKNOWN_OBJECT: &str = "Unknown Object";

// ── Units ───────────────────────────────────────────────────────

/// Astronomical units per parsec, rounded the way the info panel shows it.
pub const AU_PER_PARSEC: f64 = 206_265.0;
