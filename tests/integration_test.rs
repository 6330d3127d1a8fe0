use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};

const HEADER: &str = "date,account_id,counterparty_id,booking_amount,sequence_id,monthly,monthly_consistency_score";

fn run_binary(sample: &str, extra_args: &[&str]) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_recurring-sequence-engine");
    let sample_path = Path::new("samples").join(sample);

    Ok(Command::new(binary_path)
        .arg(sample_path)
        .args(extra_args)
        .output()?)
}

/// Maps `account_id -> [(date, sequence_id, monthly_consistency_score)]`.
fn scores_by_account(stdout: &str) -> HashMap<String, Vec<(String, String, String)>> {
    let mut results: HashMap<String, Vec<(String, String, String)>> = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        results.entry(fields[1].to_string())
            .or_default()
            .push((fields[0].to_string(), fields[4].to_string(), fields[6].to_string()));
    }

    results
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let output = run_binary("sample.csv", &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some(HEADER));

    let mut row_count = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 7);

        let _: f64 = fields[3].parse()?;
        let _: u32 = fields[4].parse()?;

        if !fields[5].is_empty() {
            let _: bool = fields[5].parse()?;
        }

        if !fields[6].is_empty() {
            let score: f64 = fields[6].parse()?;
            assert!((0.0..=1.0).contains(&score));
        }

        row_count += 1;
    }

    assert_eq!(row_count, 60);

    Ok(())
}

#[test]
fn test_cli_outputs_expected_scores_with_default_multiplier() -> Result<()> {
    let output = run_binary("fixed.csv", &[])?;

    assert!(output.status.success());

    let results = scores_by_account(&String::from_utf8(output.stdout)?);

    let account_1 = results.get("acct_id_1").ok_or_else(|| anyhow!("acct_id_1 missing from output"))?;
    assert!(account_1.iter().all(|(_, sequence, score)| sequence == "0" && score == "1.0"));

    let account_2 = results.get("acct_id_2").ok_or_else(|| anyhow!("acct_id_2 missing from output"))?;
    assert!(account_2.iter().all(|(_, sequence, score)| sequence == "0" && score == "0.75"));

    let account_3 = results.get("acct_id_3").ok_or_else(|| anyhow!("acct_id_3 missing from output"))?;
    assert!(account_3.iter().all(|(_, sequence, score)| sequence == "0" && score == "0.5"));

    let account_4 = results.get("acct_id_4").ok_or_else(|| anyhow!("acct_id_4 missing from output"))?;
    assert_eq!(account_4, &vec![("2025-02-10".to_string(), "0".to_string(), String::new())]);

    Ok(())
}

#[test]
fn test_cli_honours_threshold_multiplier_argument() -> Result<()> {
    let output = run_binary("fixed.csv", &["2.0"])?;

    assert!(output.status.success());

    let results = scores_by_account(&String::from_utf8(output.stdout)?);
    let account_3 = results.get("acct_id_3").ok_or_else(|| anyhow!("acct_id_3 missing from output"))?;

    let sequences: Vec<&str> = account_3.iter().map(|(_, sequence, _)| sequence.as_str()).collect();
    assert_eq!(sequences, vec!["0", "1", "0", "1", "0"]);

    for (_, sequence, score) in account_3 {
        let expected = if sequence == "0" { "1.0" } else { "0.0" };
        assert_eq!(score, expected);
    }

    Ok(())
}

#[test]
fn test_cli_fails_on_malformed_amount() -> Result<()> {
    let output = run_binary("malformed.csv", &[])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("booking_amount"));
    assert!(stderr.contains("forty-two"));

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_threshold_multiplier() -> Result<()> {
    let output = run_binary("fixed.csv", &["-1"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Usage:"));
    assert!(stderr.contains("-1"));

    Ok(())
}

#[test]
fn test_cli_passes_extra_columns_through() -> Result<()> {
    let output = run_binary("described.csv", &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], format!("{HEADER},description,channel"));
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "2025-01-01,acct_id_1,ctpty_1,1200.00,0,,,\"rent, flat 2\",transfer");
    assert_eq!(lines[2], "2025-01-03,acct_id_2,ctpty_2,3.50,0,,,coffee,card");
    assert_eq!(lines[3], "2025-02-01,acct_id_1,ctpty_1,1200.00,0,true,1.0,\"rent, flat 2\",transfer");
    assert_eq!(lines[4], "2025-02-03,acct_id_2,ctpty_2,3.50,0,true,1.0,,card");

    Ok(())
}
