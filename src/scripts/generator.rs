/**
 * ============================================================================
 * SCRIPT GENERATOR MODULE
 * ============================================================================
 *
 * PURPOSE: Render bash launch scripts from camera records
 *
 * PER-CAMERA SCRIPT:
 * - Config values baked in as defaults, overridable via environment
 * - Resolves a numeric device id from the configured path (direct
 *   /dev/videoN match, bare integer, or symlink target)
 * - Launches `ros2 run image_tools cam2image` with namespace/topic remaps
 *
 * MASTER SCRIPT:
 * - Backgrounds every per-camera script from its own directory, then waits
 *
 * ============================================================================
 */

use crate::config::CameraConfig;

// Bash launcher for one configured camera
pub fn camera_script(camera: &CameraConfig) -> String {
    [
        "#!/bin/bash".to_string(),
        "set -euo pipefail".to_string(),
        String::new(),
        format!("DEVICE_PATH=\"{}\"", camera.device_path),
        format!("WIDTH=${{WIDTH:-{}}}", camera.width),
        format!("HEIGHT=${{HEIGHT:-{}}}", camera.height),
        format!("FREQ=${{FREQ:-{}}}", camera.fps),
        format!("FRAME_ID=${{FRAME_ID:-\"{}\"}}", camera.frame_id),
        format!("NAMESPACE=${{NAMESPACE:-\"{}\"}}", camera.namespace),
        format!("IMAGE_TOPIC=${{IMAGE_TOPIC:-\"{}\"}}", camera.image_topic),
        String::new(),
        "resolve_device_id() {".to_string(),
        "  local input=\"$1\"".to_string(),
        String::new(),
        "  if [ -z \"$input\" ]; then".to_string(),
        "    return 1".to_string(),
        "  fi".to_string(),
        String::new(),
        "  if [[ \"$input\" =~ ^/dev/video([0-9]+)$ ]]; then".to_string(),
        "    echo \"${BASH_REMATCH[1]}\"".to_string(),
        "    return 0".to_string(),
        "  fi".to_string(),
        String::new(),
        "  if [[ \"$input\" =~ ^[0-9]+$ ]]; then".to_string(),
        "    echo \"$input\"".to_string(),
        "    return 0".to_string(),
        "  fi".to_string(),
        String::new(),
        "  if [ -e \"$input\" ]; then".to_string(),
        "    local target".to_string(),
        "    target=$(readlink -f \"$input\")".to_string(),
        "    if [[ \"$target\" =~ /dev/video([0-9]+)$ ]]; then".to_string(),
        "      echo \"${BASH_REMATCH[1]}\"".to_string(),
        "      return 0".to_string(),
        "    fi".to_string(),
        "  fi".to_string(),
        String::new(),
        "  return 1".to_string(),
        "}".to_string(),
        String::new(),
        "DEVICE_ID=$(resolve_device_id \"$DEVICE_PATH\" || true)".to_string(),
        "if [ -z \"$DEVICE_ID\" ]; then".to_string(),
        "  echo \"Failed to resolve device id from $DEVICE_PATH\" >&2".to_string(),
        "  exit 1".to_string(),
        "fi".to_string(),
        String::new(),
        "ros2 run image_tools cam2image --ros-args \\".to_string(),
        "  -p device_id:=$DEVICE_ID \\".to_string(),
        "  -p width:=$WIDTH \\".to_string(),
        "  -p height:=$HEIGHT \\".to_string(),
        "  -p frequency:=$FREQ \\".to_string(),
        "  -p frame_id:=$FRAME_ID \\".to_string(),
        "  --remap __ns:=$NAMESPACE \\".to_string(),
        "  --remap image:=$IMAGE_TOPIC".to_string(),
    ]
    .join("\n")
}

// Master launcher: background every script in order, then wait on all
pub fn start_all_script(script_names: &[String]) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        "set -euo pipefail".to_string(),
        String::new(),
        "SCRIPT_DIR=$(cd \"$(dirname \"$0\")\" && pwd)".to_string(),
        String::new(),
    ];
    for script in script_names {
        lines.push(format!("$SCRIPT_DIR/{} &", script));
    }
    lines.push("wait".to_string());
    lines.join("\n")
}
