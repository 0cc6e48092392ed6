//! Project phase constants and validation.
//!
//! Phases track a project through the production pipeline. The stored value
//! is plain text backed by a CHECK constraint in the `projects` table.

/// Footage is being shot.
pub const PHASE_CAPTURE: &str = "capture";
/// Footage is being cut.
pub const PHASE_EDITING: &str = "editing";
/// Delivered to the client.
pub const PHASE_FINISHED: &str = "finished";

/// All valid phase values, in pipeline order.
pub const VALID_PHASES: &[&str] = &[PHASE_CAPTURE, PHASE_EDITING, PHASE_FINISHED];

/// Validate that a phase is one of the allowed values.
pub fn validate_phase(phase: &str) -> Result<(), String> {
    if VALID_PHASES.contains(&phase) {
        Ok(())
    } else {
        Err(format!(
            "Fase inválida: '{phase}'. Valores válidos: {}",
            VALID_PHASES.join(", ")
        ))
    }
}
