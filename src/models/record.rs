use std::io::Read;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::SchemaError;
use crate::models::{Extras, Transaction, TransactionTable};
use crate::types::RowIndex;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const REQUIRED_COLUMNS: [&str; 4] = ["date", "account_id", "counterparty_id", "booking_amount"];

/// Represents the required fields of one input CSV row before validation.
///
/// Every field is kept as text so a bad value can be reported with its
/// column and row instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    pub date: String,
    pub account_id: String,
    pub counterparty_id: String,
    pub booking_amount: String
}

impl TransactionRecord {
    /// Converts the record into a typed [`Transaction`] carrying `extras`.
    ///
    /// # Errors
    /// Returns `SchemaError` if:
    /// - An identifier is empty.
    /// - The date is not `YYYY-MM-DD`.
    /// - The amount is not a decimal number or is negative.
    pub fn validate(self, row: usize, extras: Extras) -> Result<Transaction, SchemaError> {
        if self.account_id.is_empty() {
            return Err(SchemaError::empty_field(row, "account_id"));
        }

        if self.counterparty_id.is_empty() {
            return Err(SchemaError::empty_field(row, "counterparty_id"));
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| SchemaError::invalid_date(row, &self.date))?;

        let booking_amount = Decimal::from_str(&self.booking_amount)
            .map_err(|_| SchemaError::invalid_amount(row, &self.booking_amount))?;

        if booking_amount.is_sign_negative() && !booking_amount.is_zero() {
            return Err(SchemaError::negative_amount(row, &self.booking_amount));
        }

        Ok(Transaction {
            date,
            account_id: self.account_id,
            counterparty_id: self.counterparty_id,
            booking_amount,
            extras
        })
    }
}

/// Column layout of an input CSV: where the required columns are and which
/// columns are carried through untouched.
#[derive(Debug, Clone)]
pub struct CsvLayout {
    headers: StringRecord,
    extra_indices: Vec<usize>,
    extra_columns: Vec<String>
}

impl CsvLayout {
    /// Fails with the first required column absent from `headers`.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, SchemaError> {
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(SchemaError::missing_column(column));
            }
        }

        let (extra_indices, extra_columns): (Vec<usize>, Vec<String>) = headers.iter()
            .enumerate()
            .filter(|(_, header)| !REQUIRED_COLUMNS.contains(header))
            .map(|(index, header)| (index, header.to_string()))
            .unzip();

        Ok(Self {
            headers: headers.clone(),
            extra_indices,
            extra_columns
        })
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// Validates one data record; `row` counts data rows from 1.
    pub fn parse(&self, record: &StringRecord, row: usize) -> Result<Transaction, SchemaError> {
        let fields: TransactionRecord = record.deserialize(Some(&self.headers))?;
        let extras = self.extra_indices.iter()
            .map(|&index| record.get(index).unwrap_or_default().to_string())
            .collect();

        fields.validate(row, extras)
    }
}

/// Streams every validated row of a transaction CSV into `sink`.
///
/// Stops at the first invalid row, or early when `sink` returns `false`.
/// Returns the extra column names and the number of rows handed over.
pub fn read_transactions_with<R, F>(reader: R, mut sink: F) -> Result<(Vec<String>, usize), SchemaError>
where
    R: Read,
    F: FnMut(RowIndex, Transaction) -> bool,
{
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader);

    let layout = CsvLayout::from_headers(reader.headers()?)?;
    let mut row_count = 0;

    for (index, result) in reader.records().enumerate() {
        let transaction = layout.parse(&result?, index + 1)?;

        if !sink(index, transaction) {
            break;
        }

        row_count += 1;
    }

    Ok((layout.extra_columns().to_vec(), row_count))
}

/// Reads and validates every row of a transaction CSV.
///
/// No partial table is returned on error.
pub fn read_transactions<R: Read>(reader: R) -> Result<TransactionTable, SchemaError> {
    let mut transactions = Vec::new();

    let (extra_columns, _) = read_transactions_with(reader, |_, transaction| {
        transactions.push(transaction);
        true
    })?;

    Ok(TransactionTable { extra_columns, transactions })
}
