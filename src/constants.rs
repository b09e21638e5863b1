// src/constants.rs
//! Domain constants that define what a release build consists of.
//!
//! Each constant is named for the part of the release it describes. Read
//! together they tell the whole story: which scripts go into the bundle,
//! where the bundle lands, which service minifies it, and what ships in
//! the archive.

// ---------------------------------------------------------------------------
// Bundle inputs
// ---------------------------------------------------------------------------

/// Browser scripts concatenated into the bundle, in load order.
///
/// Order matters: it is the order the browser executes the scripts in.
pub const SOURCE_SCRIPTS: [&str; 6] = [
    "public/jsfxr.js",
    "public/jsfxrsequencer.js",
    "public/audio.js",
    "public/levels.js",
    "public/common.js",
    "public/game.js",
];

/// Directive removed from the bundle before minification.
///
/// Removal is a plain substring replacement over the whole bundle.
pub const STRICT_MODE_DIRECTIVE: &str = "'use strict';";

// ---------------------------------------------------------------------------
// Release outputs
// ---------------------------------------------------------------------------

/// Unminified bundle, kept next to the release for debugging.
pub const ORIGINAL_BUNDLE_PATH: &str = "release/bundle_original.js";

/// Minified bundle as returned by the compiler service.
pub const COMPILED_BUNDLE_PATH: &str = "release/bundle.js";

/// Distributable archive.
pub const RELEASE_ARCHIVE_PATH: &str = "release/retrohaunt.zip";

/// Files packed into the release archive.
pub const RELEASE_FILES: [&str; 2] = ["./release/bundle.js", "./release/index.html"];

// ---------------------------------------------------------------------------
// Compiler service
// ---------------------------------------------------------------------------

/// Closure Compiler web service endpoint.
pub const COMPILER_ENDPOINT: &str = "https://closure-compiler.appspot.com/compile";

pub const DEFAULT_COMPILATION_LEVEL: &str = "ADVANCED_OPTIMIZATIONS";

pub const DEFAULT_LANGUAGE_OUT: &str = "ECMASCRIPT_2017";

/// The service returns plain compiled code rather than a JSON envelope.
pub const OUTPUT_FORMAT: &str = "text";

pub const OUTPUT_INFO: &str = "compiled_code";

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Toolchain version window
// ---------------------------------------------------------------------------

/// Toolchain the version guard checks.
pub const GUARDED_TOOL: &str = "rustc";

/// Oldest supported toolchain (inclusive); matches `rust-version` in Cargo.toml.
pub const MIN_SUPPORTED_VERSION: (u32, u32) = (1, 80);

/// First unsupported toolchain (exclusive).
pub const VERSION_LESS_THAN: (u32, u32) = (2, 0);
