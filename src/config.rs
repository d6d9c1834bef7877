/// Default nesting limit shared by the reader and the evaluator. Fits a
/// default 2 MiB thread stack in a debug build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deepest list nesting the reader accepts, and deepest evaluation
    /// recursion before `RecursionLimitExceeded`.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
