use serde_json::json;

use factum_core::traits::{CheckResult, IConstraint};
use factum_tokens::tokenize;

pub const QUOTE_TOO_SHORT: &str = "quote_too_short";

/// Rejects quotes with fewer than `min` tokens.
#[derive(Debug, Clone, Copy)]
pub struct MinQuoteTokens {
    min: usize,
}

impl MinQuoteTokens {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl IConstraint for MinQuoteTokens {
    fn name(&self) -> &str {
        "min_quote_tokens"
    }

    fn check(&self, _claim: &str, quote: &str) -> CheckResult {
        let tokens = tokenize(quote).len();
        if tokens >= self.min {
            return CheckResult::pass();
        }
        CheckResult::fail(
            QUOTE_TOO_SHORT,
            format!("quote has {tokens} tokens, need at least {}", self.min),
        )
        .with_detail("tokens", json!(tokens))
        .with_detail("min_tokens", json!(self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        let c = MinQuoteTokens::new(3);
        assert!(c.check("", "one two three").passed);
        let r = c.check("", "one two");
        assert!(!r.passed);
        assert_eq!(r.code, QUOTE_TOO_SHORT);
        assert_eq!(r.detail["tokens"], 2);
    }
}
