/**
 * ============================================================================
 * CAPABILITY PROBE MODULE
 * ============================================================================
 *
 * PURPOSE: Query a device's current format via v4l2-ctl
 *
 * FUNCTIONALITY:
 * - Run `v4l2-ctl --device=<path> --all` with a wall-clock timeout
 * - Distinguish tool-missing, timeout, and nonzero-exit failures
 * - Extract capability summary lines and the active Width/Height
 *
 * Probe failures are per-device and recoverable: the caller records the
 * failure message as a synthetic summary line instead of aborting the scan.
 *
 * ============================================================================
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

// Default wall-clock budget for one v4l2-ctl invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

// Output lines worth keeping in the device summary
static INFO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"Caps").unwrap(),
        Regex::new(r"Width/Height").unwrap(),
        Regex::new(r"Payload").unwrap(),
        Regex::new(r"Pixel Format").unwrap(),
    ]
});

// Active resolution, e.g. "Width/Height      : 1280/720"
static SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Width/Height\s*:\s*(\d+)\s*/\s*(\d+)").unwrap());

/**
 * Run v4l2-ctl against one device and return its stdout.
 *
 * Err carries a user-facing failure message:
 * - "v4l2-ctl not found" when the binary is missing
 * - "v4l2-ctl timeout" when the deadline expires (the child is killed)
 * - trimmed stderr, or "v4l2-ctl failed", on nonzero exit
 */
pub fn run_v4l2_all(device_path: &Path, timeout: Duration) -> Result<String, String> {
    let mut child = Command::new("v4l2-ctl")
        .arg(format!("--device={}", device_path.display()))
        .arg("--all")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                "v4l2-ctl not found".to_string()
            } else {
                format!("v4l2-ctl failed to start: {}", e)
            }
        })?;

    // std::process has no wait-with-deadline, so poll try_wait and kill on
    // expiry. v4l2-ctl output is small enough to never fill the pipe.
    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err("v4l2-ctl timeout".to_string());
                }
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(e) => {
                let _ = child.kill();
                return Err(format!("v4l2-ctl wait failed: {}", e));
            }
        }
    };

    let mut stdout = String::new();
    if let Some(mut pipe) = child.stdout.take() {
        let _ = pipe.read_to_string(&mut stdout);
    }
    let mut stderr = String::new();
    if let Some(mut pipe) = child.stderr.take() {
        let _ = pipe.read_to_string(&mut stderr);
    }

    if !status.success() {
        let message = stderr.trim();
        if message.is_empty() {
            return Err("v4l2-ctl failed".to_string());
        }
        return Err(message.to_string());
    }

    Ok(stdout)
}

/**
 * Pull the interesting lines and the active resolution out of probe output.
 *
 * Every line matching one of the fixed field patterns is kept verbatim
 * (trimmed). Width and height come from the first Width/Height line with
 * numeric captures.
 */
pub fn extract_summary(output: &str) -> (Vec<String>, Option<u32>, Option<u32>) {
    let mut lines = Vec::new();
    let mut width = None;
    let mut height = None;

    for line in output.lines() {
        if INFO_PATTERNS.iter().any(|p| p.is_match(line)) {
            lines.push(line.trim().to_string());
        }

        if line.contains("Width/Height") {
            if let Some(caps) = SIZE_PATTERN.captures(line) {
                width = caps[1].parse::<u32>().ok();
                height = caps[2].parse::<u32>().ok();
            }
        }
    }

    (lines, width, height)
}
