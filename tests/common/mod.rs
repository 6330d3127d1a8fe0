use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use recurring_sequence_engine::models::Transaction;

const DATE_SPAN_DAYS: i64 = 2 * 365;

/// Number of (account, counterparty) identifiers to draw from so that pairs
/// average roughly `avg_n_trx_per_pair` rows.
pub fn number_of_pairs(n_trx: usize, avg_n_trx_per_pair: usize) -> usize {
    ((n_trx as f64 / avg_n_trx_per_pair as f64).sqrt().floor() as usize).max(1)
}

/// Draws `n_trx` random transactions with replacement from a pool of
/// accounts, counterparties and dates starting at 2024-01-01.
pub fn generate_random_transactions(n_trx: usize, avg_n_trx_per_pair: usize, seed: u64) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs = number_of_pairs(n_trx, avg_n_trx_per_pair);

    let account_ids: Vec<String> = (0..pairs).map(|index| format!("acct-{index:04}")).collect();
    let counterparty_ids: Vec<String> = (0..pairs).map(|index| format!("ctpty-{index:04}")).collect();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date");

    (0..n_trx)
        .map(|_| {
            let date = start + Duration::days(rng.gen_range(0..DATE_SPAN_DAYS));
            let account_id = account_ids.choose(&mut rng).cloned().unwrap_or_default();
            let counterparty_id = counterparty_ids.choose(&mut rng).cloned().unwrap_or_default();
            let amount = Decimal::from(rng.gen_range(1..=100i64));

            Transaction::new(date, account_id, counterparty_id, amount)
        })
        .collect()
}
