/**
 * ============================================================================
 * CONFIG STORE MODULE
 * ============================================================================
 *
 * PURPOSE: Read and write the cameras.json document
 *
 * FUNCTIONALITY:
 * - Save the ConfigDocument as pretty JSON, creating parent directories
 * - Load camera entries for batch mode with lenient field coercion
 *
 * The loader deliberately mirrors the historical behavior: numeric fields
 * are coerced best-effort (numbers and numeric strings) and default to zero
 * when absent or unparseable. Structural problems and invalid namespace or
 * image_topic values are fatal; frame_id is not grammar-checked here.
 *
 * ============================================================================
 */

use crate::config::types::{CameraConfig, ConfigDocument};
use crate::config::validate::{is_valid_namespace, is_valid_rel_name};
use serde_json::Value;
use std::fs;
use std::path::Path;

// Save the document as pretty JSON with a trailing newline
pub fn save_document(path: &Path, document: &ConfigDocument) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
    }

    let contents = serde_json::to_string_pretty(document)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    fs::write(path, contents + "\n").map_err(|e| format!("Failed to write config: {}", e))?;

    log::info!("Saved config to {:?}", path);
    Ok(())
}

/**
 * Load and validate camera entries from a config file.
 *
 * Fatal conditions: unreadable file, invalid JSON, non-object root, missing
 * or empty or non-list "cameras", non-object entry, empty name or
 * device_path, invalid namespace, invalid image_topic.
 */
pub fn load_cameras(path: &Path) -> Result<Vec<CameraConfig>, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;

    let raw: Value =
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))?;

    let root = raw
        .as_object()
        .ok_or_else(|| "Config root must be an object".to_string())?;

    let camera_items = match root.get("cameras") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err("No cameras in config".to_string()),
    };

    let mut cameras = Vec::with_capacity(camera_items.len());
    for item in camera_items {
        let entry = item
            .as_object()
            .ok_or_else(|| "Each camera entry must be an object".to_string())?;

        let camera = CameraConfig {
            name: coerce_string(entry.get("name")),
            device_path: coerce_string(entry.get("device_path")),
            width: coerce_u32(entry.get("width")),
            height: coerce_u32(entry.get("height")),
            fps: coerce_f64(entry.get("fps")),
            namespace: coerce_string(entry.get("namespace")),
            frame_id: coerce_string(entry.get("frame_id")),
            image_topic: coerce_string(entry.get("image_topic")),
        };

        if camera.name.is_empty() || camera.device_path.is_empty() {
            return Err("Camera entry missing name or device_path".to_string());
        }
        if !is_valid_namespace(&camera.namespace) {
            return Err(format!(
                "Invalid namespace in config: {} (must start with /)",
                camera.namespace
            ));
        }
        if !is_valid_rel_name(&camera.image_topic) {
            return Err(format!(
                "Invalid image_topic in config: {}",
                camera.image_topic
            ));
        }

        cameras.push(camera);
    }

    Ok(cameras)
}

// Stringify a field: strings pass through, other scalars are rendered
fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

// Best-effort integer coercion; absent or unparseable values become 0
fn coerce_u32(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f as u64))
            .unwrap_or(0) as u32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

// Best-effort float coercion; absent or unparseable values become 0.0
fn coerce_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_camera() -> CameraConfig {
        CameraConfig {
            name: "cam0".to_string(),
            device_path: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30.0,
            namespace: "/ns".to_string(),
            frame_id: "f".to_string(),
            image_topic: "t".to_string(),
        }
    }

    fn write_config(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cameras.json");
        fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("configs").join("cameras.json");

        let document = ConfigDocument::new(vec![sample_camera()]);
        save_document(&path, &document).unwrap();

        let loaded = load_cameras(&path).unwrap();
        assert_eq!(loaded, document.cameras);
    }

    #[test]
    fn test_load_rejects_non_object_root() {
        let (_dir, path) = write_config("[1, 2]");
        assert_eq!(
            load_cameras(&path).unwrap_err(),
            "Config root must be an object"
        );
    }

    #[test]
    fn test_load_rejects_missing_or_empty_cameras() {
        let (_dir, path) = write_config("{}");
        assert_eq!(load_cameras(&path).unwrap_err(), "No cameras in config");

        let (_dir, path) = write_config(r#"{"cameras": []}"#);
        assert_eq!(load_cameras(&path).unwrap_err(), "No cameras in config");

        let (_dir, path) = write_config(r#"{"cameras": "nope"}"#);
        assert_eq!(load_cameras(&path).unwrap_err(), "No cameras in config");
    }

    #[test]
    fn test_load_rejects_non_object_entry() {
        let (_dir, path) = write_config(r#"{"cameras": [42]}"#);
        assert_eq!(
            load_cameras(&path).unwrap_err(),
            "Each camera entry must be an object"
        );
    }

    #[test]
    fn test_load_rejects_missing_name_or_device() {
        let (_dir, path) =
            write_config(r#"{"cameras": [{"device_path": "/dev/video0"}]}"#);
        assert!(load_cameras(&path)
            .unwrap_err()
            .contains("missing name or device_path"));
    }

    #[test]
    fn test_load_rejects_bad_namespace_and_topic() {
        let (_dir, path) = write_config(
            r#"{"cameras": [{"name": "c", "device_path": "/dev/video0",
                "namespace": "ns", "image_topic": "t"}]}"#,
        );
        assert!(load_cameras(&path).unwrap_err().contains("Invalid namespace"));

        let (_dir, path) = write_config(
            r#"{"cameras": [{"name": "c", "device_path": "/dev/video0",
                "namespace": "/ns", "image_topic": "/t/"}]}"#,
        );
        assert!(load_cameras(&path)
            .unwrap_err()
            .contains("Invalid image_topic"));
    }

    #[test]
    fn test_load_coerces_missing_numerics_to_zero() {
        // Historical behavior kept on purpose: absent or non-numeric width,
        // height, and fps silently load as zero.
        let (_dir, path) = write_config(
            r#"{"cameras": [{"name": "c", "device_path": "/dev/video0",
                "namespace": "/ns", "frame_id": "f", "image_topic": "t",
                "fps": "fast"}]}"#,
        );
        let cameras = load_cameras(&path).unwrap();
        assert_eq!(cameras[0].width, 0);
        assert_eq!(cameras[0].height, 0);
        assert_eq!(cameras[0].fps, 0.0);
    }

    #[test]
    fn test_load_coerces_numeric_strings() {
        let (_dir, path) = write_config(
            r#"{"cameras": [{"name": "c", "device_path": "/dev/video0",
                "namespace": "/ns", "frame_id": "f", "image_topic": "t",
                "width": "640", "height": 480.0, "fps": "29.97"}]}"#,
        );
        let cameras = load_cameras(&path).unwrap();
        assert_eq!(cameras[0].width, 640);
        assert_eq!(cameras[0].height, 480);
        assert!((cameras[0].fps - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_cameras(Path::new("/nonexistent/cameras.json"))
            .unwrap_err()
            .contains("Failed to read config"));
    }
}
