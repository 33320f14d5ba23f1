//! Per-user output tree: the two JSON tiers plus login screenshots.
//!
//! Everything is written wholesale each run; existing files are replaced.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn for_user(username: &str) -> Self {
        OutputPaths {
            root: PathBuf::from("output").join(username),
        }
    }

    /// Creates the user directory and the screenshots subdirectory.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(self.screenshots_dir())
            .with_context(|| format!("failed to create {:?}", self.screenshots_dir()))?;
        Ok(())
    }

    pub fn level1(&self) -> PathBuf {
        self.root.join("level1.json")
    }

    pub fn level2(&self) -> PathBuf {
        self.root.join("level2.json")
    }

    fn screenshots_dir(&self) -> PathBuf {
        self.root.join("screenshots")
    }

    pub fn login_screenshot(&self, timestamp: &str, successful: bool) -> PathBuf {
        let tag = if successful {
            "successful"
        } else {
            "unsuccessful"
        };
        self.screenshots_dir()
            .join(format!("{}_{}_login.png", timestamp, tag))
    }
}

/// Serializes `value` as indented UTF-8 JSON, replacing any previous file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize record")?;
    fs::write(path, json).with_context(|| format!("failed to write {:?}", path))?;
    info!("Wrote {:?}", path);
    Ok(())
}

pub fn write_screenshot(path: &Path, png: &[u8]) -> Result<()> {
    fs::write(path, png).with_context(|| format!("failed to write {:?}", path))?;
    info!("Saved screenshot {:?}", path);
    Ok(())
}
