#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Export the Happy UI color tokens into the UI static directory.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Writes `static/tokens.css` (custom properties) and `static/tokens.json`
//!   (role/tone to hex maps), replacing previous outputs.
//! - Validates the written CSS for both theme selectors before writing the lock file.
//! - Emits a deterministic `TOKENS_LOCK.txt` containing both output hashes.
//!
//! Failure modes include an unresolvable UI root, write errors, or CSS that
//! lacks the expected selectors.

use std::fs;
use std::path::{Path, PathBuf};

use happy_ui::core::tokens::{
    DARK_SCHEME, EXTENDED, LIGHT_SCHEME, Palette, REFERENCE_PALETTES, css_custom_properties,
};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;

const OUTPUT_ROOT: &str = "static";
const CSS_FILE: &str = "tokens.css";
const JSON_FILE: &str = "tokens.json";
const LOCK_FILE: &str = "TOKENS_LOCK.txt";
const CSS_MARKERS: [&str; 2] = ["--md-sys-color-primary:", "[data-theme=\"dark\"]"];

/// Errors returned by the token sync tool.
#[derive(Debug, Error)]
pub enum TokenSyncError {
    /// A required path could not be resolved.
    #[error("required path is missing: {}", path.display())]
    MissingPath {
        /// Path that could not be resolved.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The token JSON could not be rendered.
    #[error("token json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// The written CSS failed the sanity check.
    #[error("token CSS failed validation at {}: {reason}", path.display())]
    CssInvalid {
        /// CSS path that failed validation.
        path: PathBuf,
        /// Reason the CSS was rejected.
        reason: String,
    },
}

/// Hashes of the files written by one sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// SHA-256 of `tokens.css`.
    pub css_sha256: String,
    /// SHA-256 of `tokens.json`.
    pub json_sha256: String,
}

/// Run the token export using the repository-relative paths.
///
/// # Errors
/// Returns an error if outputs cannot be written or the CSS fails the sanity check.
pub fn run() -> Result<SyncReport, TokenSyncError> {
    let ui_root = ui_root_dir()?;
    sync_tokens(&ui_root)
}

/// Write all token outputs under `ui_root/static`.
///
/// # Errors
/// Returns an error if outputs cannot be written or the CSS fails the sanity check.
pub fn sync_tokens(ui_root: &Path) -> Result<SyncReport, TokenSyncError> {
    let output_root = ui_root.join(OUTPUT_ROOT);
    ensure_dir_exists(&output_root)?;

    let css_path = output_root.join(CSS_FILE);
    write_file(&css_path, css_custom_properties().as_bytes())?;
    validate_css(&css_path)?;

    let json_path = output_root.join(JSON_FILE);
    let json = serde_json::to_string_pretty(&tokens_json())?;
    write_file(&json_path, json.as_bytes())?;

    let report = SyncReport {
        css_sha256: sha256_hex(&css_path)?,
        json_sha256: sha256_hex(&json_path)?,
    };
    write_lock(&output_root, &report)?;
    Ok(report)
}

fn ui_root_dir() -> Result<PathBuf, TokenSyncError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| TokenSyncError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

fn tokens_json() -> Value {
    let mut root = Map::new();
    root.insert("light".to_string(), palette_json(LIGHT_SCHEME));
    root.insert("dark".to_string(), palette_json(DARK_SCHEME));
    root.insert("reference".to_string(), palettes_json(&REFERENCE_PALETTES));
    root.insert("extended".to_string(), palettes_json(&EXTENDED));
    Value::Object(root)
}

fn palettes_json(palettes: &[Palette]) -> Value {
    Value::Object(
        palettes
            .iter()
            .map(|palette| (palette.id.to_string(), palette_json(*palette)))
            .collect(),
    )
}

fn palette_json(palette: Palette) -> Value {
    Value::Object(
        palette
            .shades
            .iter()
            .map(|shade| (shade.name.to_string(), Value::from(shade.hex)))
            .collect(),
    )
}

fn ensure_dir_exists(path: &Path) -> Result<(), TokenSyncError> {
    fs::create_dir_all(path).map_err(|source| TokenSyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), TokenSyncError> {
    fs::write(path, contents).map_err(|source| TokenSyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_css(path: &Path) -> Result<(), TokenSyncError> {
    let contents = fs::read_to_string(path).map_err(|source| TokenSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(marker) = CSS_MARKERS
        .iter()
        .find(|marker| !contents.contains(*marker))
    {
        return Err(TokenSyncError::CssInvalid {
            path: path.to_path_buf(),
            reason: format!("missing marker {marker}"),
        });
    }
    Ok(())
}

fn sha256_hex(path: &Path) -> Result<String, TokenSyncError> {
    let bytes = fs::read(path).map_err(|source| TokenSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

fn write_lock(output_root: &Path, report: &SyncReport) -> Result<(), TokenSyncError> {
    let lock_path = output_root.join(LOCK_FILE);
    let contents = format!(
        "{CSS_FILE} sha256 {}\n{JSON_FILE} sha256 {}\n",
        report.css_sha256, report.json_sha256
    );
    write_file(&lock_path, contents.as_bytes())
}
