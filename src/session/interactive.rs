/**
 * ============================================================================
 * INTERACTIVE SESSION MODULE
 * ============================================================================
 *
 * PURPOSE: Walk the user from device scan to generated launch scripts
 *
 * FLOW (four ordered steps, no backward transitions):
 * 1. Scan    - probe devices, show the summary table, fail on zero devices
 * 2. Select  - camera count and device indices, re-prompting until valid
 * 3. Configure - per-camera name, geometry, fps, namespace, frame id, topic
 * 4. Review  - summary table, confirmation, then config + script output
 *
 * Nothing is written to disk before the user confirms in step 4.
 *
 * ============================================================================
 */

use crate::config::store;
use crate::config::validate::{
    is_valid_namespace, is_valid_rel_name, parse_selection_with_count, sanitize_name,
};
use crate::config::{CameraConfig, ConfigDocument};
use crate::discovery::{scanner, Device};
use crate::scripts::writer;
use crate::session::prompt::Prompter;
use crate::session::table;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    // Config written and scripts generated
    Committed,
    // User backed out; nothing written
    Cancelled,
}

const BANNER: &str = "\
========================================
 AnyCam2Ros
 Discover & Configure Any Camera for ROS2
========================================";

// Full interactive setup against the live /dev layout
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config_path: &Path,
    output_dir: &Path,
) -> Result<SessionOutcome, String> {
    prompter.writeln(BANNER)?;
    prompter.writeln("")?;
    prompter.writeln("--- Step 1/4: Scan Environment ---")?;
    prompter.writeln("Scanning for cameras...")?;

    let devices = scanner::scan_default();
    run_with_devices(prompter, devices, config_path, output_dir)
}

/**
 * The session from "scan finished" onwards, with devices injected so tests
 * can drive the whole flow from an in-memory console.
 */
pub fn run_with_devices<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    devices: Vec<Device>,
    config_path: &Path,
    output_dir: &Path,
) -> Result<SessionOutcome, String> {
    if devices.is_empty() {
        return Err(
            "No /dev/video* devices found. Make sure your camera is connected.".to_string(),
        );
    }

    prompter.writeln(&table::device_table(&devices))?;
    prompter.writeln("Hint: Prefer stable paths in /dev/v4l/by-id or /dev/v4l/by-path.")?;

    prompter.writeln("")?;
    prompter.writeln("--- Step 2/4: Selection ---")?;
    prompter.writeln(&format!("Detected devices: {}", devices.len()))?;

    let camera_count = match prompt_camera_count(prompter, devices.len())? {
        Some(count) => count,
        None => {
            prompter.writeln("Cancelled.")?;
            return Ok(SessionOutcome::Cancelled);
        }
    };

    prompter.writeln("Select device IDs separated by comma (e.g. 0,2), or 'all'.")?;
    let selections = loop {
        let raw = prompter.ask("Select device IDs", None)?;
        match parse_selection_with_count(&raw, devices.len(), camera_count) {
            Ok(selections) => break selections,
            Err(e) => prompter.writeln(&format!("Invalid selection: {}", e))?,
        }
    };

    prompter.writeln("")?;
    prompter.writeln("--- Step 3/4: Configuration ---")?;

    let mut cameras: Vec<CameraConfig> = Vec::with_capacity(selections.len());
    let mut used_names = HashSet::new();
    for idx in selections {
        let dev = &devices[idx];
        cameras.push(configure_camera(prompter, idx, dev, &mut used_names)?);
    }

    prompter.writeln("")?;
    prompter.writeln("--- Step 4/4: Review ---")?;
    prompter.writeln(&table::review_table(&cameras))?;
    prompter.writeln("")?;

    if !prompter.confirm("Proceed to generate scripts?")? {
        prompter.writeln("Cancelled.")?;
        return Ok(SessionOutcome::Cancelled);
    }

    let document = ConfigDocument::new(cameras);
    store::save_document(config_path, &document)?;
    let start_all_path = writer::generate_all(&document.cameras, output_dir)?;

    prompter.writeln("")?;
    prompter.writeln("Setup complete!")?;
    prompter.writeln(&format!("Config saved to: {}", config_path.display()))?;
    prompter.writeln(&format!("Scripts generated in: {}", output_dir.display()))?;
    prompter.writeln(&format!(
        "Run all cameras with: {}",
        start_all_path.display()
    ))?;
    prompter.writeln("")?;
    prompter.writeln("Quick verification commands:")?;
    for camera in &document.cameras {
        prompter.writeln(&format!(
            "  ros2 run image_view image_view --ros-args -r image:={}",
            camera.full_topic()
        ))?;
    }

    Ok(SessionOutcome::Committed)
}

/**
 * Ask how many cameras to configure. Counts above the detected device
 * count re-prompt (with the device count as the new default); a
 * non-positive count is a clean abort and returns None.
 */
fn prompt_camera_count<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    device_count: usize,
) -> Result<Option<usize>, String> {
    let label = "How many cameras do you want to configure?";
    let mut count = prompter.ask_i64(label, 2)?;
    loop {
        if count <= 0 {
            return Ok(None);
        }
        if count as usize <= device_count {
            return Ok(Some(count as usize));
        }
        prompter.writeln("Count exceeds detected devices.")?;
        count = prompter.ask_i64(label, device_count as i64)?;
    }
}

// Step 3 for one selected device
fn configure_camera<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    idx: usize,
    dev: &Device,
    used_names: &mut HashSet<String>,
) -> Result<CameraConfig, String> {
    prompter.writeln("")?;
    prompter.writeln(&format!(
        "Configuring device {} ({})",
        idx,
        dev.path.display()
    ))?;
    if let Some(stable) = dev.by_id.as_ref().or(dev.by_path.as_ref()) {
        prompter.writeln(&format!("Stable path: {}", stable.display()))?;
    }

    let default_name = format!("cam{}", idx);
    let name = loop {
        let raw = prompter.ask("Friendly name", Some(&default_name))?;
        match sanitize_name(&raw) {
            Ok(name) if used_names.contains(&name) => {
                prompter.writeln("Name already used.")?;
            }
            Ok(name) => break name,
            Err(e) => prompter.writeln(&e)?,
        }
    };
    used_names.insert(name.clone());

    let width = prompter.ask_u32("Width", dev.width.unwrap_or(1920))?;
    let height = prompter.ask_u32("Height", dev.height.unwrap_or(1080))?;
    let fps = prompter.ask_f64("FPS", 30.0)?;

    let namespace = loop {
        let value = prompter.ask(
            "ROS namespace (must start with /)",
            Some(&format!("/hdas/camera_{}", name)),
        )?;
        if is_valid_namespace(&value) {
            break value;
        }
        prompter.writeln("Invalid namespace. Example: /hdas/camera_left")?;
    };

    let frame_id = prompt_rel_name(prompter, "Frame ID", &format!("{}_camera", name))?;
    let image_topic = prompt_rel_name(prompter, "Image topic", "color/image_raw")?;

    Ok(CameraConfig {
        name,
        device_path: dev.preferred_path().display().to_string(),
        width,
        height,
        fps,
        namespace,
        frame_id,
        image_topic,
    })
}

// Relative-name prompt: leading slashes stripped, grammar enforced
fn prompt_rel_name<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    label: &str,
    default: &str,
) -> Result<String, String> {
    loop {
        let value = prompter.ask(label, Some(default))?;
        let value = value.trim_start_matches('/').to_string();
        if is_valid_rel_name(&value) {
            return Ok(value);
        }
        prompter.writeln("Invalid value. Use letters/numbers/_ and '/'.")?;
    }
}
