/**
 * ============================================================================
 * SESSION MODULE
 * ============================================================================
 *
 * PURPOSE: Interactive camera setup flow over an injected console
 *
 * ARCHITECTURE:
 * - prompt: line-based prompt helpers over BufRead/Write
 * - table: plain-text summary tables
 * - interactive: the four-step scan/select/configure/review flow
 *
 * All console I/O goes through the injected reader and writer so the whole
 * flow is scriptable in tests.
 *
 * ============================================================================
 */

pub mod interactive;
pub mod prompt;
pub mod table;

pub use interactive::SessionOutcome;
pub use prompt::Prompter;
