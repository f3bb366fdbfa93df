use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenshugoError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a top-level array of kana records")]
    ExpectedArray,

    #[error("record {index}: expected an object")]
    ExpectedRecord { index: usize },

    #[error("record {index}: missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field '{field}' has the wrong type")]
    InvalidField { index: usize, field: &'static str },

    #[error("record {index}: field '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("record {index}: duplicate kana id {id}")]
    DuplicateId { index: usize, id: u32 },

    #[error("row size must be greater than zero")]
    InvalidRowSize,
}

impl RenshugoError {
    /// True when the load failure means the input text itself was not
    /// well-formed, as opposed to a schema violation inside it.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, RenshugoError::Json(_) | RenshugoError::ExpectedArray)
    }

    /// True when the text parsed but a record broke the schema or the id
    /// uniqueness invariant.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            RenshugoError::ExpectedRecord { .. }
                | RenshugoError::MissingField { .. }
                | RenshugoError::InvalidField { .. }
                | RenshugoError::EmptyField { .. }
                | RenshugoError::DuplicateId { .. }
        )
    }
}
