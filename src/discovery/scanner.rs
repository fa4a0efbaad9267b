/**
 * ============================================================================
 * DEVICE SCANNER MODULE
 * ============================================================================
 *
 * PURPOSE: Enumerate video device nodes and their stable symlink aliases
 *
 * FUNCTIONALITY:
 * - List /dev/video* nodes in lexical order
 * - Map canonical device paths to /dev/v4l/by-id and by-path symlinks
 * - Probe each node and assemble Device records for one scan pass
 *
 * ============================================================================
 */

use crate::discovery::probe;
use crate::discovery::types::Device;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

// Default locations on a stock Linux host
pub const DEV_DIR: &str = "/dev";
pub const BY_ID_DIR: &str = "/dev/v4l/by-id";
pub const BY_PATH_DIR: &str = "/dev/v4l/by-path";

/**
 * List video device nodes under `dev_dir`.
 *
 * Entries whose file name starts with "video" are kept if they still exist,
 * sorted lexically by path string. Lexical order is intentional: "video10"
 * sorts before "video2", matching how the rest of the tooling indexes
 * devices.
 */
pub fn list_video_devices(dev_dir: &Path) -> Vec<PathBuf> {
    let mut devices: Vec<PathBuf> = match fs::read_dir(dev_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with("video"))
                    .unwrap_or(false)
            })
            .filter(|p| p.exists())
            .collect(),
        Err(e) => {
            log::warn!("Failed to read {:?}: {}", dev_dir, e);
            Vec::new()
        }
    };

    devices.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    devices
}

/**
 * Build alias maps from two stable-naming directories.
 *
 * Each map goes canonicalized symlink target -> symlink path. Missing or
 * unreadable directories produce empty maps, not errors.
 */
pub fn build_symlink_maps(
    by_id_dir: &Path,
    by_path_dir: &Path,
) -> (HashMap<PathBuf, PathBuf>, HashMap<PathBuf, PathBuf>) {
    (read_symlink_dir(by_id_dir), read_symlink_dir(by_path_dir))
}

// Map of canonical target -> symlink for one directory of symlinks
fn read_symlink_dir(dir: &Path) -> HashMap<PathBuf, PathBuf> {
    let mut map = HashMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return map,
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let link = entry.path();
        let is_symlink = fs::symlink_metadata(&link)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if !is_symlink {
            continue;
        }
        match fs::canonicalize(&link) {
            Ok(target) => {
                map.insert(target, link);
            }
            Err(e) => {
                log::debug!("Skipping dangling symlink {:?}: {}", link, e);
            }
        }
    }

    map
}

/**
 * One full scan pass: enumerate nodes, attach aliases, probe capabilities.
 *
 * Probe failures are folded into the device record as a single synthetic
 * summary line; the scan itself never fails.
 */
pub fn scan(dev_dir: &Path, by_id_dir: &Path, by_path_dir: &Path) -> Vec<Device> {
    let (by_id, by_path) = build_symlink_maps(by_id_dir, by_path_dir);
    let nodes = list_video_devices(dev_dir);
    let mut results = Vec::with_capacity(nodes.len());

    for node in nodes {
        log::info!("Probing {:?}", node);
        let real = fs::canonicalize(&node).unwrap_or_else(|_| node.clone());

        let (summary_lines, width, height) =
            match probe::run_v4l2_all(&node, probe::DEFAULT_TIMEOUT) {
                Ok(output) => probe::extract_summary(&output),
                Err(message) => {
                    log::warn!("Probe failed for {:?}: {}", node, message);
                    (vec![message], None, None)
                }
            };

        results.push(Device {
            path: node,
            by_id: by_id.get(&real).cloned(),
            by_path: by_path.get(&real).cloned(),
            summary_lines,
            width,
            height,
        });
    }

    results
}

// Scan with the stock /dev layout
pub fn scan_default() -> Vec<Device> {
    scan(
        Path::new(DEV_DIR),
        Path::new(BY_ID_DIR),
        Path::new(BY_PATH_DIR),
    )
}
