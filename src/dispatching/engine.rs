//! Rule engine for ready-queue selection.
//!
//! Applies rules in sequence, consulting the next rule only on ties, and
//! falls back to the smaller pid once all rules are exhausted.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, DispatchingRule, RuleScore};
use crate::models::Process;

/// A composable rule engine for ready-queue selection.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pid order only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. Earlier rules dominate later ones.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns the score from each rule.
    pub fn evaluate(&self, process: &Process, context: &DispatchContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    /// Total order over ready processes: rule scores, then pid.
    pub fn compare(&self, a: &Process, b: &Process, context: &DispatchContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule
                .evaluate(a, context)
                .cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.pid.cmp(&b.pid)
    }

    /// Returns the index of the process to dispatch next.
    pub fn select_best(&self, ready: &[Process], context: &DispatchContext) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| self.compare(a, b, context))
            .map(|(i, _)| i)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn ready_set() -> Vec<Process> {
        vec![
            Process::new(4, 3, 5).with_priority(2),
            Process::new(2, 1, 4).with_priority(1),
            Process::new(5, 4, 2).with_priority(5),
            Process::new(3, 2, 9).with_priority(4),
        ]
    }

    #[test]
    fn test_shortest_burst_selection() {
        let ctx = DispatchContext::at_time(8);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        let ready = ready_set();
        assert_eq!(ready[engine.select_best(&ready, &ctx).unwrap()].pid, 5);
    }

    #[test]
    fn test_priority_selection() {
        let ctx = DispatchContext::at_time(8);
        let engine = RuleEngine::new().with_rule(rules::HighestPriority);
        let ready = ready_set();
        assert_eq!(ready[engine.select_best(&ready, &ctx).unwrap()].pid, 2);
    }

    #[test]
    fn test_pid_breaks_ties() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        let ready = vec![Process::new(7, 0, 3), Process::new(2, 5, 3), Process::new(4, 1, 3)];
        assert_eq!(ready[engine.select_best(&ready, &ctx).unwrap()].pid, 2);
    }

    #[test]
    fn test_sequential_rules() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::HighestPriority)
            .with_rule(rules::ShortestBurst);
        let ready = vec![
            Process::new(1, 0, 9).with_priority(1),
            Process::new(2, 0, 4).with_priority(1),
            Process::new(3, 0, 1).with_priority(2),
        ];
        // Priority ties between P1 and P2 → shorter burst wins
        assert_eq!(ready[engine.select_best(&ready, &ctx).unwrap()].pid, 2);
    }

    #[test]
    fn test_empty_ready_queue() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let ctx = DispatchContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::HighestPriority);
        let p = Process::new(1, 0, 6).with_priority(3);
        assert_eq!(engine.evaluate(&p, &ctx), vec![6, 3]);
    }

    #[test]
    fn test_debug_lists_rules() {
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(format!("{engine:?}"), "RuleEngine { rules: [\"SJF\"] }");
    }
}
