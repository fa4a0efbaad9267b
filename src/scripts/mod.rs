/**
 * ============================================================================
 * SCRIPTS MODULE
 * ============================================================================
 *
 * PURPOSE: Render and write the generated camera launch scripts
 *
 * ARCHITECTURE:
 * - generator: bash script text for one camera and for the master launcher
 * - writer: executable file output and batch generation
 *
 * ============================================================================
 */

pub mod generator;
pub mod writer;
