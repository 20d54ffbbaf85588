//! Dispatching rules and rule engine for ready-queue selection.
//!
//! The non-preemptive policies share one control loop and differ only in
//! how they pick the next process from the ready queue. That choice is a
//! [`DispatchingRule`]; a [`RuleEngine`] chains rules and always ends on the
//! pid, so every selection is a total order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{DispatchContext, RuleEngine};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Process;
//!
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let ready = vec![Process::new(1, 0, 8), Process::new(2, 0, 3)];
//! let best = engine.select_best(&ready, &DispatchContext::at_time(0));
//! assert_eq!(best, Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Integer so that equal keys compare
/// exactly and fall through to the next rule.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates a ready process at the current dispatch decision.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
