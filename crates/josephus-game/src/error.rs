/// Errors that can occur when constructing a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SimulatorError {
    /// The ring must contain at least one entry.
    #[display("count must be at least 1")]
    ZeroCount,
    /// Each round must advance at least one position.
    #[display("step must be at least 1")]
    ZeroStep,
}
