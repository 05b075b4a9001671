//! Per-quote constraints and the ordered set that runs them.

mod min_tokens;
mod numeric;

pub use min_tokens::MinQuoteTokens;
pub use numeric::NumericPreservation;

use tracing::debug;

use factum_core::config::PolicyConfig;
use factum_core::traits::{CheckResult, IConstraint};

/// Result of running every constraint against one quote.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintOutcome {
    Passed,
    /// The first constraint that rejected the quote.
    Failed {
        constraint: String,
        result: CheckResult,
    },
}

impl ConstraintOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, ConstraintOutcome::Passed)
    }
}

/// Constraints in registration order.
#[derive(Default)]
pub struct ConstraintSet {
    constraints: Vec<Box<dyn IConstraint>>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in constraints enabled by `config`, numeric preservation
    /// first.
    pub fn from_policy(config: &PolicyConfig) -> Self {
        let mut set = Self::new();
        if config.numeric_preservation {
            set.push(Box::new(NumericPreservation));
        }
        if let Some(min) = config.min_quote_tokens {
            set.push(Box::new(MinQuoteTokens::new(min)));
        }
        set
    }

    pub fn push(&mut self, constraint: Box<dyn IConstraint>) {
        self.constraints.push(constraint);
    }

    pub fn with(mut self, constraint: Box<dyn IConstraint>) -> Self {
        self.push(constraint);
        self
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.constraints.iter().map(|c| c.name()).collect()
    }

    /// Evaluate in order, stopping at the first failure.
    pub fn evaluate(&self, claim: &str, quote: &str) -> ConstraintOutcome {
        for constraint in &self.constraints {
            let result = constraint.check(claim, quote);
            if !result.passed {
                debug!(
                    constraint = constraint.name(),
                    code = %result.code,
                    "quote rejected"
                );
                return ConstraintOutcome::Failed {
                    constraint: constraint.name().to_string(),
                    result,
                };
            }
        }
        ConstraintOutcome::Passed
    }
}

impl std::fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("constraints", &self.names())
            .finish()
    }
}
