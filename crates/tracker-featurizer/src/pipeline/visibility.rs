//! Visibility filtering: fallback-turn removal and rule-run collapsing.

use tracing::debug;
use tracker_core::models::Turn;

/// Which turns are hidden from the produced sequences. Both default to
/// keeping every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityFlags {
    /// Collapse rule-originated runs. Only meaningful at inference time.
    pub ignore_rule_only_turns: bool,
    /// Remove turns opened by the low-confidence fallback action.
    pub ignore_action_unlikely_intent: bool,
}

/// Apply both filters. Rule runs are collapsed first, then fallback turns
/// are dropped from what remains.
pub fn apply(turns: Vec<Turn>, flags: VisibilityFlags) -> Vec<Turn> {
    let turns = if flags.ignore_rule_only_turns {
        collapse_rule_runs(turns)
    } else {
        turns
    };
    if flags.ignore_action_unlikely_intent {
        remove_unlikely_intent_turns(turns)
    } else {
        turns
    }
}

/// Remove every turn opened by the fallback action. Its state leaves every
/// window and its action leaves the label stream.
pub fn remove_unlikely_intent_turns(turns: Vec<Turn>) -> Vec<Turn> {
    let before = turns.len();
    let kept: Vec<Turn> = turns.into_iter().filter(|t| !t.is_unlikely_intent).collect();
    if kept.len() != before {
        debug!(removed = before - kept.len(), "removed fallback turns");
    }
    kept
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    InRuleRun,
    OutsideRuleRun,
}

/// Result of scanning a dialogue for rule-only runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleRunScan {
    /// Position of the last turn of the most recent rule-only run.
    pub last_run_end: Option<usize>,
    /// Number of distinct contiguous runs.
    pub runs: usize,
}

/// Single forward pass over the turns tracking rule-run boundaries.
pub fn scan_rule_runs(turns: &[Turn]) -> RuleRunScan {
    let mut scan = RuleRunScan::default();
    let mut run_state = RunState::OutsideRuleRun;
    for (position, turn) in turns.iter().enumerate() {
        run_state = match (run_state, turn.is_rule_only) {
            (RunState::OutsideRuleRun, true) => {
                scan.runs += 1;
                scan.last_run_end = Some(position);
                RunState::InRuleRun
            }
            (RunState::InRuleRun, true) => {
                scan.last_run_end = Some(position);
                RunState::InRuleRun
            }
            (_, false) => RunState::OutsideRuleRun,
        };
    }
    scan
}

/// Drop everything up to and including the end of the last rule-only run
/// and restart the sequence from an empty state, as if the dialogue had been
/// reset right after the rule fired. Turns after the run are kept as-is.
pub fn collapse_rule_runs(turns: Vec<Turn>) -> Vec<Turn> {
    let scan = scan_rule_runs(&turns);
    let Some(end) = scan.last_run_end else {
        return turns;
    };
    debug!(runs = scan.runs, dropped = end + 1, "collapsed rule-only turns");

    let mut collapsed = Vec::with_capacity(turns.len() - end);
    collapsed.push(Turn::opening(turns[end].index));
    collapsed.extend(turns.into_iter().skip(end + 1));
    collapsed
}
