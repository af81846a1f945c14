use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timestamp parsing error: {0}")]
    TimeParse(#[from] chrono::ParseError),

    #[error("Invalid numeric value in column '{column}': '{value}'")]
    InvalidNumber { column: String, value: String },

    #[error("Header has {found} columns, expected at least {expected}")]
    MissingColumn { expected: usize, found: usize },

    #[error("Column '{0}' not found in catalog")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric")]
    ColumnNotNumeric(String),

    #[error("Column '{0}' contains no numeric values")]
    EmptyColumn(String),
}
