/**
 * ============================================================================
 * DISCOVERY TYPES MODULE
 * ============================================================================
 *
 * PURPOSE: Data structures describing a discovered video device
 *
 * Device records live only for the duration of one scan pass; they are
 * consumed by the interactive session and never persisted.
 *
 * ============================================================================
 */

use std::path::PathBuf;

// A discovered video device with optional stable aliases and probe results
#[derive(Debug, Clone)]
pub struct Device {
    // Raw device node, e.g. /dev/video0
    pub path: PathBuf,

    // Stable /dev/v4l/by-id symlink pointing at this node, if any
    pub by_id: Option<PathBuf>,

    // Stable /dev/v4l/by-path symlink pointing at this node, if any
    pub by_path: Option<PathBuf>,

    // Verbatim capability lines matched from the probe output; on probe
    // failure this is a single synthetic line with the failure message
    pub summary_lines: Vec<String>,

    // Current capture width reported by the probe
    pub width: Option<u32>,

    // Current capture height reported by the probe
    pub height: Option<u32>,
}

impl Device {
    // Preferred path for launch scripts: by-id beats by-path beats raw node
    pub fn preferred_path(&self) -> &PathBuf {
        self.by_id
            .as_ref()
            .or(self.by_path.as_ref())
            .unwrap_or(&self.path)
    }

    // Shortened stable alias for table display, "-" when none exists
    pub fn stable_label(&self) -> String {
        match self.by_id.as_ref().or(self.by_path.as_ref()) {
            Some(alias) => alias
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "-".to_string()),
            None => "-".to_string(),
        }
    }

    // "WxH" when the probe reported a resolution, "-" otherwise
    pub fn resolution_label(&self) -> String {
        match (self.width, self.height) {
            (Some(w), Some(h)) => format!("{}x{}", w, h),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(by_id: Option<&str>, by_path: Option<&str>) -> Device {
        Device {
            path: PathBuf::from("/dev/video0"),
            by_id: by_id.map(PathBuf::from),
            by_path: by_path.map(PathBuf::from),
            summary_lines: Vec::new(),
            width: None,
            height: None,
        }
    }

    #[test]
    fn test_preferred_path_prefers_by_id() {
        let dev = device(
            Some("/dev/v4l/by-id/usb-cam-video-index0"),
            Some("/dev/v4l/by-path/pci-0000:00:14.0-usb-0:1:1.0-video-index0"),
        );
        assert_eq!(
            dev.preferred_path(),
            &PathBuf::from("/dev/v4l/by-id/usb-cam-video-index0")
        );
    }

    #[test]
    fn test_preferred_path_falls_back_to_by_path_then_node() {
        let dev = device(None, Some("/dev/v4l/by-path/pci-video-index0"));
        assert_eq!(
            dev.preferred_path(),
            &PathBuf::from("/dev/v4l/by-path/pci-video-index0")
        );

        let dev = device(None, None);
        assert_eq!(dev.preferred_path(), &PathBuf::from("/dev/video0"));
    }

    #[test]
    fn test_stable_label_shortens_to_basename() {
        let dev = device(Some("/dev/v4l/by-id/usb-cam-video-index0"), None);
        assert_eq!(dev.stable_label(), "usb-cam-video-index0");

        let dev = device(None, None);
        assert_eq!(dev.stable_label(), "-");
    }

    #[test]
    fn test_resolution_label() {
        let mut dev = device(None, None);
        assert_eq!(dev.resolution_label(), "-");

        dev.width = Some(1280);
        assert_eq!(dev.resolution_label(), "-");

        dev.height = Some(720);
        assert_eq!(dev.resolution_label(), "1280x720");
    }
}
