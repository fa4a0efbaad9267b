/**
 * ============================================================================
 * DISCOVERY MODULE
 * ============================================================================
 *
 * PURPOSE: Find V4L2 video devices and probe their current capabilities
 *
 * ARCHITECTURE:
 * - types: Ephemeral device records produced by one scan pass
 * - scanner: /dev/video* enumeration and stable symlink alias maps
 * - probe: v4l2-ctl invocation with timeout and output parsing
 *
 * ============================================================================
 */

pub mod probe;
pub mod scanner;
pub mod types;

pub use types::Device;
