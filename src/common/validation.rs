use validator::ValidationError;

/// Recusa textos vazios ou só com espaços.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("O campo é obrigatório.".into());
        return Err(err);
    }
    Ok(())
}
