/**
 * ============================================================================
 * SCRIPT WRITER MODULE
 * ============================================================================
 *
 * PURPOSE: Write generated scripts as executable files
 *
 * FUNCTIONALITY:
 * - Create the output directory as needed
 * - Write each script with a trailing newline
 * - Add execute bits for owner/group/other on top of the existing mode
 *
 * ============================================================================
 */

use crate::config::CameraConfig;
use crate::scripts::generator;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

// Write one script file with a trailing newline and execute bits set
pub fn write_executable(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, format!("{}\n", content))
        .map_err(|e| format!("Failed to write {:?}: {}", path, e))?;

    let metadata =
        fs::metadata(path).map_err(|e| format!("Failed to stat {:?}: {}", path, e))?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)
        .map_err(|e| format!("Failed to chmod {:?}: {}", path, e))?;

    Ok(())
}

/**
 * Generate every per-camera script plus the master launcher into
 * `output_dir`, creating it first. Returns the master script path.
 */
pub fn generate_all(cameras: &[CameraConfig], output_dir: &Path) -> Result<PathBuf, String> {
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output dir: {}", e))?;

    let mut script_names = Vec::with_capacity(cameras.len());
    for camera in cameras {
        let script_name = camera.script_name();
        let script_path = output_dir.join(&script_name);
        write_executable(&script_path, &generator::camera_script(camera))?;
        log::info!("Generated {:?}", script_path);
        script_names.push(script_name);
    }

    let start_all_path = output_dir.join("start_all_cams.sh");
    write_executable(&start_all_path, &generator::start_all_script(&script_names))?;
    log::info!("Generated {:?}", start_all_path);

    Ok(start_all_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_camera(name: &str) -> CameraConfig {
        CameraConfig {
            name: name.to_string(),
            device_path: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30.0,
            namespace: "/ns".to_string(),
            frame_id: "f".to_string(),
            image_topic: "t".to_string(),
        }
    }

    fn is_executable(path: &Path) -> bool {
        fs::metadata(path).unwrap().permissions().mode() & 0o111 == 0o111
    }

    #[test]
    fn test_write_executable_adds_bits_and_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.sh");

        write_executable(&path, "#!/bin/bash\necho hi").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("echo hi\n"));
        assert!(is_executable(&path));
    }

    #[test]
    fn test_write_executable_preserves_existing_mode_bits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.sh");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_executable(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o751);
    }

    #[test]
    fn test_generate_all_creates_scripts_and_master() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("generated");
        let cameras = vec![sample_camera("front"), sample_camera("rear")];

        let master = generate_all(&cameras, &output_dir).unwrap();
        assert_eq!(master, output_dir.join("start_all_cams.sh"));

        for name in ["start_cam_front.sh", "start_cam_rear.sh", "start_all_cams.sh"] {
            let path = output_dir.join(name);
            assert!(path.exists(), "missing {}", name);
            assert!(is_executable(&path), "not executable: {}", name);
        }

        let master_contents = fs::read_to_string(&master).unwrap();
        assert!(master_contents.contains("$SCRIPT_DIR/start_cam_front.sh &"));
        assert!(master_contents.contains("$SCRIPT_DIR/start_cam_rear.sh &"));
    }
}
