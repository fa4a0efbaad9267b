/**
 * ============================================================================
 * CONFIG TYPES MODULE
 * ============================================================================
 *
 * PURPOSE: Data structures for persisted camera configuration
 *
 * STORAGE: JSON document written next to the generated scripts:
 * { "generated_at": "<RFC 3339 UTC>", "cameras": [ ... ] }
 *
 * CameraConfig records are created once (interactive entry or config load)
 * and never mutated afterwards; they are the sole input to script rendering.
 *
 * ============================================================================
 */

use chrono::Utc;
use serde::{Deserialize, Serialize};

// One configured camera, ready for script rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    // Unique within a session; lowercase alnum + underscore only
    pub name: String,

    // Launch device: stable by-id/by-path symlink preferred over raw node
    pub device_path: String,

    // Capture width in pixels
    pub width: u32,

    // Capture height in pixels
    pub height: u32,

    // Capture frequency passed to cam2image
    pub fps: f64,

    // ROS namespace; always begins with '/'
    pub namespace: String,

    // Frame id; slash-separated segments, no leading slash
    pub frame_id: String,

    // Image topic relative to the namespace; no leading slash
    pub image_topic: String,
}

impl CameraConfig {
    // Deterministic launcher file name for this camera
    pub fn script_name(&self) -> String {
        format!("start_cam_{}.sh", self.name)
    }

    // Fully qualified image topic: namespace + "/" + image_topic
    pub fn full_topic(&self) -> String {
        crate::config::validate::join_topic(&self.namespace, &self.image_topic)
    }
}

// The persisted configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigDocument {
    // RFC 3339 UTC timestamp of when the document was written
    pub generated_at: String,

    // Configured cameras in entry order
    pub cameras: Vec<CameraConfig>,
}

impl ConfigDocument {
    // Wrap a camera list with the current timestamp
    pub fn new(cameras: Vec<CameraConfig>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            cameras,
        }
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

    #[test]
    fn test_script_name() {
        assert_eq!(sample_camera().script_name(), "start_cam_cam0.sh");
    }

    #[test]
    fn test_full_topic() {
        assert_eq!(sample_camera().full_topic(), "/ns/t");
    }

    #[test]
    fn test_document_serialization_round_trip() {
        let doc = ConfigDocument::new(vec![sample_camera()]);
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: ConfigDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_document_timestamp_parses_as_rfc3339() {
        let doc = ConfigDocument::new(Vec::new());
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.generated_at).is_ok());
    }
}
