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
//! CLI entrypoint for the token sync tool.
//!
//! # Design
//! Delegates to the library implementation and surfaces errors via `anyhow`.

use anyhow::{Context, Result};
use std::io::{self, Write};

fn main() -> Result<()> {
    let report = token_sync::run().context("token sync failed")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "tokens.css sha256 {}", report.css_sha256)?;
    writeln!(stdout, "tokens.json sha256 {}", report.json_sha256)?;
    Ok(())
}
