//! Property tests for decision invariants.

use factum_core::config::FactumConfig;
use factum_policy::VerifierPolicy;
use proptest::prelude::*;
use test_fixtures::financial_corpus;

const WORDS: &[&str] = &[
    "acme", "revenue", "grew", "42%", "2023", "dividend", "0.25", "plant", "ohio", "closed",
    "jane", "smith", "bakery", "debt", "300", "million", "dollars", "the", "in", "by",
];

fn claim_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS), 1..8).prop_map(|w| w.join(" ") + "."),
        0..4,
    )
    .prop_map(|sentences| sentences.join(" "))
}

fn policy() -> VerifierPolicy {
    VerifierPolicy::from_records(&financial_corpus(), &FactumConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_phantom_evidence(text in claim_text()) {
        let v = policy().verify(&text, None).unwrap();
        for d in &v.decisions {
            for q in &d.quotes {
                let p = d.passage_for(q);
                prop_assert!(p.is_some());
                prop_assert!(p.unwrap().text[q.start..q.end] == q.text);
            }
            if d.supported {
                prop_assert!(!d.quotes.is_empty());
                prop_assert!(d.score >= d.threshold);
            } else {
                prop_assert!(!d.failures.is_empty());
            }
        }
    }

    #[test]
    fn verification_is_deterministic(text in claim_text()) {
        let policy = policy();
        prop_assert_eq!(policy.verify(&text, None).unwrap(), policy.verify(&text, None).unwrap());
    }

    #[test]
    fn lowering_threshold_never_withdraws_support(text in claim_text(), hi in 0.0f64..=1.0, lo_frac in 0.0f64..=1.0) {
        let lo = hi * lo_frac;
        let policy = policy();
        let strict = policy.verify(&text, Some(hi)).unwrap();
        let lenient = policy.verify(&text, Some(lo)).unwrap();
        for (s, l) in strict.decisions.iter().zip(&lenient.decisions) {
            prop_assert!(!s.supported || l.supported);
        }
    }
}
