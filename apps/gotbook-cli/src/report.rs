//! Result rows for the `check` subcommand

use std::error::Error;
use std::fmt;
use std::io::Write;

use gotbook_core::{clean_isbn, InvalidIsbn, IsbnEdition, Validator};
use serde::Serialize;

/// Outcome of cleaning and validating one raw scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub cleaned: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<IsbnEdition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidIsbn>,
}

impl CheckReport {
    pub fn check(validator: &Validator, raw: &str) -> Self {
        let cleaned = clean_isbn(raw);
        let result = validator.validate(&cleaned);
        Self {
            input: raw.to_string(),
            valid: result.is_ok(),
            edition: result.as_ref().ok().copied(),
            reason: result.err(),
            cleaned,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.edition, &self.reason) {
            (Some(edition), _) => write!(f, "{}\tvalid {}", self.cleaned, edition),
            (None, Some(reason)) => write!(f, "{}\tinvalid: {}", self.cleaned, reason),
            (None, None) => write!(f, "{}\tinvalid", self.cleaned),
        }
    }
}

/// Check every raw scan and write one row per input, as text or a JSON array.
///
/// Returns whether all inputs were valid ISBNs; the caller maps that to the
/// process exit code.
pub fn run_check<W: Write>(
    validator: &Validator,
    raw: &[String],
    json: bool,
    out: &mut W,
) -> Result<bool, Box<dyn Error>> {
    let reports: Vec<CheckReport> = raw
        .iter()
        .map(|r| CheckReport::check(validator, r))
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else {
        for report in &reports {
            writeln!(out, "{}", report)?;
        }
    }

    Ok(reports.iter().all(|r| r.valid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gotbook_core::DigitGate;

    #[test]
    fn test_valid_report() {
        let report = CheckReport::check(&Validator::default(), "ISBN 978-0-13-468599-1");
        assert!(report.valid);
        assert_eq!(report.cleaned, "9780134685991");
        assert_eq!(report.to_string(), "9780134685991\tvalid ISBN-13");
    }

    #[test]
    fn test_invalid_report() {
        let report = CheckReport::check(&Validator::default(), "080442957X");
        assert!(!report.valid);
        assert_eq!(report.reason, Some(InvalidIsbn::BadCharacters));
        assert_eq!(
            report.to_string(),
            "080442957X\tinvalid: contains characters outside the digit set"
        );
    }

    #[test]
    fn test_gate_override() {
        let report = CheckReport::check(&Validator::new(DigitGate::Radix11), "080442957X");
        assert_eq!(report.edition, Some(IsbnEdition::Isbn10));
    }

    fn check(validator: &Validator, raw: &[&str], json: bool) -> (bool, String) {
        let raw: Vec<String> = raw.iter().map(|r| r.to_string()).collect();
        let mut out = Vec::new();
        let all_valid = run_check(validator, &raw, json, &mut out).unwrap();
        (all_valid, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_check_all_valid() {
        let (all_valid, output) = check(&Validator::default(), &["0306406152", "9790134685991"], false);
        assert!(all_valid);
        assert_eq!(output, "0306406152\tvalid ISBN-10\n9790134685991\tvalid ISBN-13\n");
    }

    #[test]
    fn test_run_check_fails_if_any_invalid() {
        let (all_valid, output) = check(&Validator::default(), &["0306406152", "12345"], false);
        assert!(!all_valid);
        assert_eq!(output.lines().count(), 2);
        assert!(output.ends_with("12345\tinvalid: unexpected length 5\n"));
    }

    #[test]
    fn test_run_check_gate_changes_outcome() {
        let (decimal, _) = check(&Validator::default(), &["080442957X"], false);
        let (radix11, _) = check(&Validator::new(DigitGate::Radix11), &["080442957X"], false);
        assert!(!decimal);
        assert!(radix11);
    }

    #[test]
    fn test_run_check_json_array() {
        let (all_valid, output) = check(&Validator::default(), &["ISBN 0-306-40615-1"], true);
        assert!(!all_valid);
        let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(rows[0]["cleaned"], "0306406151");
        assert_eq!(rows[0]["valid"], false);
        assert_eq!(rows[0]["reason"]["kind"], "bad_checksum");
    }

    #[test]
    fn test_json_omits_empty_fields() {
        let report = CheckReport::check(&Validator::default(), "0306406152");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["edition"], "isbn10");
        assert!(json.get("reason").is_none());
    }
}
