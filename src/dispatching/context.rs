//! Dispatch context for rule evaluation.

/// Simulation state visible to dispatching rules at a decision point.
///
/// The built-in rules rank on static process fields and ignore it. Rules
/// that depend on elapsed waiting time (highest response ratio next, aging)
/// read the clock from here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchContext {
    /// Current simulation tick.
    pub current_time: i64,
}

impl DispatchContext {
    /// Creates a context at the given tick.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }
}
