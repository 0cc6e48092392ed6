//! Communication log constants and validation.
//!
//! Communications are an append-only log of client contact (emails, calls,
//! WhatsApp messages) ordered newest-first. Client notes share the content
//! validation rules.

/// Maximum length of a communication subject.
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Maximum length of communication or note content.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Known communication types.
pub const TYPE_EMAIL: &str = "email";
pub const TYPE_CALL: &str = "call";
pub const TYPE_WHATSAPP: &str = "whatsapp";
pub const TYPE_MEETING: &str = "meeting";

/// All valid communication types.
pub const VALID_TYPES: &[&str] = &[TYPE_EMAIL, TYPE_CALL, TYPE_WHATSAPP, TYPE_MEETING];

/// Communication delivery status values.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SENT: &str = "sent";
pub const STATUS_FAILED: &str = "failed";

/// All valid status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_SENT, STATUS_FAILED];

/// Identity recorded when the caller supplies no author.
pub const DEFAULT_AUTHOR: &str = "current-user";

/// Validate the required fields of a new communication: type and subject.
pub fn validate_communication(comm_type: &str, subject: &str) -> Result<(), String> {
    if comm_type.trim().is_empty() || subject.trim().is_empty() {
        return Err("Tipo e assunto são obrigatórios".to_string());
    }
    if !VALID_TYPES.contains(&comm_type) {
        return Err(format!(
            "Tipo inválido: '{comm_type}'. Valores válidos: {}",
            VALID_TYPES.join(", ")
        ));
    }
    if subject.len() > MAX_SUBJECT_LENGTH {
        return Err(format!(
            "Assunto excede o limite de {MAX_SUBJECT_LENGTH} caracteres"
        ));
    }
    Ok(())
}

/// Validate a communication status value.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Status inválido: '{status}'. Valores válidos: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate note or communication content: non-empty, within bounds.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Conteúdo é obrigatório".to_string());
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Conteúdo excede o limite de {MAX_CONTENT_LENGTH} caracteres"
        ));
    }
    Ok(())
}
