//! `bdl scan` – audit a config tree for alias/location mismatches.

use anyhow::Result;
use bdl_core::confscan;
use std::path::Path;

pub fn run_scan(dir: &Path) -> Result<()> {
    let flagged = confscan::scan_tree(dir)?;
    if flagged.is_empty() {
        println!("No files found with alias without trailing slash.");
        return Ok(());
    }
    println!("Files with alias without trailing slash:");
    for path in flagged {
        println!("{}", path.display());
    }
    Ok(())
}
