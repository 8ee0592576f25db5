use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}
