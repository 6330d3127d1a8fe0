use thiserror::Error;

/// Input that does not satisfy the transaction table schema.
///
/// Row numbers count data rows starting at 1, the header is not counted.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Required column [{column}] is missing")]
    MissingColumn {
        column: &'static str
    },
    #[error("Column [{column}] is empty in row [{row}]")]
    EmptyField {
        row: usize,
        column: &'static str
    },
    #[error("Column [date] has an unparsable value [{value}] in row [{row}]")]
    InvalidDate {
        row: usize,
        value: String
    },
    #[error("Column [booking_amount] has a non-numeric value [{value}] in row [{row}]")]
    InvalidAmount {
        row: usize,
        value: String
    },
    #[error("Column [booking_amount] has a negative value [{value}] in row [{row}]")]
    NegativeAmount {
        row: usize,
        value: String
    },
    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error)
}

impl SchemaError {
    pub fn missing_column(column: &'static str) -> Self {
        Self::MissingColumn { column }
    }

    pub fn empty_field(row: usize, column: &'static str) -> Self {
        Self::EmptyField { row, column }
    }

    pub fn invalid_date(row: usize, value: &str) -> Self {
        Self::InvalidDate { row, value: value.to_string() }
    }

    pub fn invalid_amount(row: usize, value: &str) -> Self {
        Self::InvalidAmount { row, value: value.to_string() }
    }

    pub fn negative_amount(row: usize, value: &str) -> Self {
        Self::NegativeAmount { row, value: value.to_string() }
    }
}
