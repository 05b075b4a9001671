/// Splits free text into independently verifiable claims.
pub trait IDecomposer: Send + Sync {
    fn decompose(&self, text: &str) -> Vec<String>;
}
