// Defaults for the command line options. The core never reads these
// directly, it only sees the values passed in.

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_TOLERANCE: f64 = 1e-3;
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
