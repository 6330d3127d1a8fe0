use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::DATE_FORMAT;
use crate::types::{AccountId, CounterpartyId, SequenceId};

/// Values of the input columns the transform does not interpret, in the
/// order of the table's extra column names.
pub type Extras = Vec<String>;

/// A single booked transaction between an account and a counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Booking date, no time component.
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub counterparty_id: CounterpartyId,
    /// Non-negative currency amount.
    pub booking_amount: Decimal,
    pub extras: Extras
}

impl Transaction {
    pub fn new(date: NaiveDate, account_id: impl Into<AccountId>, counterparty_id: impl Into<CounterpartyId>, booking_amount: Decimal) -> Self {
        Self {
            date,
            account_id: account_id.into(),
            counterparty_id: counterparty_id.into(),
            booking_amount,
            extras: Extras::new()
        }
    }

    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_sequence(self, sequence_id: SequenceId) -> SequencedTransaction {
        SequencedTransaction {
            date: self.date,
            account_id: self.account_id,
            counterparty_id: self.counterparty_id,
            booking_amount: self.booking_amount,
            sequence_id,
            extras: self.extras
        }
    }
}

/// A transaction assigned to an amount-based sequence within its
/// (account, counterparty) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedTransaction {
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub counterparty_id: CounterpartyId,
    pub booking_amount: Decimal,
    /// Dense, zero-based id within the pair.
    pub sequence_id: SequenceId,
    pub extras: Extras
}

impl SequencedTransaction {
    pub fn with_periodicity(self, monthly: Option<bool>, monthly_consistency_score: Option<f64>) -> AnnotatedTransaction {
        AnnotatedTransaction {
            date: self.date,
            account_id: self.account_id,
            counterparty_id: self.counterparty_id,
            booking_amount: self.booking_amount,
            sequence_id: self.sequence_id,
            monthly,
            monthly_consistency_score,
            extras: self.extras
        }
    }
}

/// Final output row of the transform.
///
/// `monthly` is `None` for the chronologically first row of its sequence.
/// `monthly_consistency_score` is `None` for sequences with a single row,
/// where there is no gap to score.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedTransaction {
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub counterparty_id: CounterpartyId,
    pub booking_amount: Decimal,
    pub sequence_id: SequenceId,
    pub monthly: Option<bool>,
    pub monthly_consistency_score: Option<f64>,
    pub extras: Extras
}

impl AnnotatedTransaction {
    /// Output record: the derived columns follow the required ones, then
    /// the extra values. Undefined values are empty fields.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.account_id.clone(),
            self.counterparty_id.clone(),
            self.booking_amount.to_string(),
            self.sequence_id.to_string(),
            self.monthly.map(|monthly| monthly.to_string()).unwrap_or_default(),
            self.monthly_consistency_score.map(|score| format!("{score:?}")).unwrap_or_default()
        ];

        record.extend(self.extras.iter().cloned());
        record
    }
}

/// Validated input rows plus the names of the columns carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionTable {
    pub extra_columns: Vec<String>,
    pub transactions: Vec<Transaction>
}

/// Annotated output rows plus the extra column names of the input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedTable {
    pub extra_columns: Vec<String>,
    pub rows: Vec<AnnotatedTransaction>
}

impl AnnotatedTable {
    pub const OUTPUT_COLUMNS: [&'static str; 7] = [
        "date",
        "account_id",
        "counterparty_id",
        "booking_amount",
        "sequence_id",
        "monthly",
        "monthly_consistency_score"
    ];

    /// Output header matching [`AnnotatedTransaction::to_record`].
    pub fn header(&self) -> Vec<String> {
        Self::OUTPUT_COLUMNS.iter()
            .map(|column| column.to_string())
            .chain(self.extra_columns.iter().cloned())
            .collect()
    }
}
