// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_BM25_K1: f64 = 1.2;
pub const DEFAULT_BM25_B: f64 = 0.75;
pub const DEFAULT_TFIDF_FALLBACK: bool = true;
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

// --- Policy ---
pub const DEFAULT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MAX_QUOTES: usize = 3;
pub const DEFAULT_MIN_PASSAGES: usize = 1;
pub const DEFAULT_QUOTE_WINDOW: usize = 300;
pub const DEFAULT_NUMERIC_PRESERVATION: bool = true;

// --- Structural checks ---
pub const DEFAULT_REQUIRE_VERBATIM: bool = true;
pub const DEFAULT_MIN_QUOTE_CHARS: usize = 20;
pub const DEFAULT_REQUIRE_DIVERSITY: bool = false;
pub const DEFAULT_MAX_QUOTE_CHARS: usize = 2000;
pub const DEFAULT_REQUIRE_PROVENANCE: bool = true;

// --- Calibration grid: 0.05..0.90, step 0.02 (stored in hundredths) ---
pub const CALIBRATION_GRID_START: u32 = 5;
pub const CALIBRATION_GRID_END: u32 = 90;
pub const CALIBRATION_GRID_STEP: usize = 2;

// --- Audit ---
pub const DEFAULT_AUDIT_FLUSH_IMMEDIATELY: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "FACTUM_LOG";
