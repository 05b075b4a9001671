use std::collections::BTreeSet;

use serde_json::Value;

use factum_core::traits::{CheckResult, IConstraint};
use factum_tokens::extract_numbers;

pub const MISSING_NUMBERS: &str = "missing_numbers";

/// Every number stated in the claim must appear in the quote. Numbers are
/// compared after comma stripping, so "1,200" matches "1200". Claims
/// without numbers always pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPreservation;

impl IConstraint for NumericPreservation {
    fn name(&self) -> &str {
        "numeric_preservation"
    }

    fn check(&self, claim: &str, quote: &str) -> CheckResult {
        let claim_numbers = extract_numbers(claim);
        if claim_numbers.is_empty() {
            return CheckResult::pass();
        }
        let quote_numbers: BTreeSet<String> = extract_numbers(quote).into_iter().collect();

        let mut seen = BTreeSet::new();
        let missing: Vec<String> = claim_numbers
            .into_iter()
            .filter(|n| !quote_numbers.contains(n) && seen.insert(n.clone()))
            .collect();
        if missing.is_empty() {
            return CheckResult::pass();
        }

        CheckResult::fail(
            MISSING_NUMBERS,
            format!("quote is missing claimed numbers: {}", missing.join(", ")),
        )
        .with_detail(
            "missing",
            Value::Array(missing.into_iter().map(Value::String).collect()),
        )
    }
}
