/**
 * ============================================================================
 * TABLE MODULE
 * ============================================================================
 *
 * PURPOSE: Plain-text tables for the scan and review steps
 *
 * ============================================================================
 */

use crate::config::CameraConfig;
use crate::discovery::Device;

// Render a titled table with columns sized to their widest cell
fn render(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![
        title.to_string(),
        format_row(&header_cells),
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    ];
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

// Scan-step table: one row per detected device
pub fn device_table(devices: &[Device]) -> String {
    let rows: Vec<Vec<String>> = devices
        .iter()
        .enumerate()
        .map(|(idx, dev)| {
            vec![
                idx.to_string(),
                dev.path.display().to_string(),
                dev.stable_label(),
                dev.resolution_label(),
                dev.summary_lines
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();

    render(
        "Detected Video Devices",
        &["ID", "Device", "Stable Info", "Resolution", "Summary"],
        &rows,
    )
}

// Review-step table: one row per configured camera
pub fn review_table(cameras: &[CameraConfig]) -> String {
    let rows: Vec<Vec<String>> = cameras
        .iter()
        .map(|camera| {
            vec![
                camera.name.clone(),
                camera.device_path.clone(),
                format!("{}x{} @ {}fps", camera.width, camera.height, camera.fps),
                camera.full_topic(),
            ]
        })
        .collect();

    render(
        "Configuration Summary",
        &["Name", "Path", "Config", "Topic"],
        &rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_device_table_placeholders() {
        let devices = vec![Device {
            path: PathBuf::from("/dev/video0"),
            by_id: None,
            by_path: None,
            summary_lines: Vec::new(),
            width: None,
            height: None,
        }];

        let table = device_table(&devices);
        assert!(table.contains("Detected Video Devices"));
        assert!(table.contains("/dev/video0"));
        // Missing alias, resolution, and summary all render as "-"
        let data_row = table.lines().last().unwrap();
        assert!(data_row.matches('-').count() >= 3);
    }

    #[test]
    fn test_device_table_with_probe_results() {
        let devices = vec![Device {
            path: PathBuf::from("/dev/video2"),
            by_id: Some(PathBuf::from("/dev/v4l/by-id/usb-cam-video-index0")),
            by_path: None,
            summary_lines: vec!["Width/Height      : 1280/720".to_string()],
            width: Some(1280),
            height: Some(720),
        }];

        let table = device_table(&devices);
        assert!(table.contains("usb-cam-video-index0"));
        assert!(table.contains("1280x720"));
        assert!(table.contains("Width/Height"));
    }

    #[test]
    fn test_review_table_formats_config() {
        let cameras = vec![CameraConfig {
            name: "cam0".to_string(),
            device_path: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30.0,
            namespace: "/ns".to_string(),
            frame_id: "f".to_string(),
            image_topic: "t".to_string(),
        }];

        let table = review_table(&cameras);
        assert!(table.contains("640x480 @ 30fps"));
        assert!(table.contains("/ns/t"));
    }
}
