//! One-time sprite preload gate
//!
//! Every frontend asset is loaded before the tick scheduler starts. Loading
//! keeps going past individual failures so one report names every broken
//! resource; any failure at all means the game refuses to start.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Every sprite the graphical presentation needs
pub const MANIFEST: [&str; 6] = [
    "player.png",
    "chaser.png",
    "acorn.svg",
    "backdrop-forest.jpeg",
    "backdrop-night.jpeg",
    "mote.png",
];

/// Aggregated preload failure listing every resource that did not load
#[derive(Debug, Error)]
#[error("failed to load {} asset(s): {}", .failed.len(), .failed.join(", "))]
pub struct AssetError {
    pub failed: Vec<String>,
}

/// Raw sprite bytes by manifest name
#[derive(Debug, Default)]
pub struct Assets {
    sprites: HashMap<String, Vec<u8>>,
}

impl Assets {
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.sprites.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.sprites.values().map(Vec::len).sum()
    }
}

/// Load every manifest entry from `dir`. Must succeed before the first tick
/// is scheduled; the caller surfaces the error and exits on failure.
pub fn preload(dir: &Path) -> Result<Assets, AssetError> {
    let mut sprites = HashMap::new();
    let mut failed = Vec::new();

    for name in MANIFEST {
        match fs::read(dir.join(name)) {
            Ok(bytes) => {
                log::debug!("loaded {name} ({} bytes)", bytes.len());
                sprites.insert(name.to_string(), bytes);
            }
            Err(err) => {
                log::error!("error loading {name}: {err}");
                failed.push(name.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(Assets { sprites })
    } else {
        Err(AssetError { failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("grove-dash-assets-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_preload_all_present() {
        let dir = scratch_dir("ok");
        for name in MANIFEST {
            fs::write(dir.join(name), b"sprite").unwrap();
        }

        let assets = preload(&dir).unwrap();
        assert_eq!(assets.len(), MANIFEST.len());
        assert_eq!(assets.get("player.png"), Some(&b"sprite"[..]));
        assert_eq!(assets.total_bytes(), MANIFEST.len() * 6);
    }

    #[test]
    fn test_preload_aggregates_every_failure() {
        let dir = scratch_dir("missing");
        // Only half the manifest is present
        for name in &MANIFEST[..3] {
            fs::write(dir.join(name), b"sprite").unwrap();
        }

        let err = preload(&dir).unwrap_err();
        assert_eq!(err.failed, &MANIFEST[3..]);
        // The message names every failed resource
        let msg = err.to_string();
        for name in &MANIFEST[3..] {
            assert!(msg.contains(name), "{msg} missing {name}");
        }
    }
}
