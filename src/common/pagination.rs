use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Parâmetros `?page=&limit=` das listagens.
#[derive(Debug, Clone, Copy, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000, message = "A página deve estar entre 1 e 1000000."))]
    #[param(example = 1)]
    pub page: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "O limite deve estar entre 1 e 100."))]
    #[param(example = 10)]
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(default_page(), default_limit())
    }
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    // Saturado: valores fora da faixa validada não podem estourar a conta
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_on_first_page() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 25).offset(), 50);
    }

    #[test]
    fn offset_never_overflows() {
        assert_eq!(Pagination::new(i64::MAX, 100).offset(), i64::MAX);
        assert_eq!(Pagination::new(i64::MIN, 10).offset(), 0);
    }

    #[test]
    fn missing_params_use_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Pagination::new(0, 10).validate().is_err());
        assert!(Pagination::new(1, 101).validate().is_err());
        assert!(Pagination::new(i64::MAX, 100).validate().is_err());
        assert!(Pagination::new(1_000_000, 100).validate().is_ok());
        assert!(Pagination::new(2, 100).validate().is_ok());
    }
}
