/**
 * ============================================================================
 * CONFIG MODULE
 * ============================================================================
 *
 * PURPOSE: Camera configuration schema, validation, and persistence
 *
 * ARCHITECTURE:
 * - types: CameraConfig and the persisted ConfigDocument
 * - validate: name sanitizer, topic grammars, device selection parsing
 * - store: JSON write and the lenient batch-mode loader
 *
 * ============================================================================
 */

pub mod store;
pub mod types;
pub mod validate;

pub use types::{CameraConfig, ConfigDocument};
