//! Step-bounded evaluation.
//!
//! The call contract layered on [`PartialFunction`]:
//!
//! | rule at input      | budget        | result                              |
//! |--------------------|---------------|-------------------------------------|
//! | never halts        | none          | `Diverges` (Abort) / `None` (Continue) |
//! | never halts        | `t`           | `None`                              |
//! | halts in `s` steps | none          | `Some(o)`                           |
//! | halts in `s` steps | `t >= s`      | `Some(o)`                           |
//! | halts in `s` steps | `t < s`       | `None`                              |
//!
//! `None` is the ordinary "has not halted (yet)" answer, not an error.

use thiserror::Error;

use dovetail_types::{InvalidArgument, Nat, Steps, UndefinedPolicy};

use crate::PartialFunction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// Unbounded evaluation of an input the function never halts on, under
    /// [`UndefinedPolicy::Abort`].
    #[error("{function}({input}) runs forever")]
    Diverges { function: String, input: Nat },
}

impl PartialFunction {
    /// Evaluate on `input`, giving up after `steps` steps if a budget is given.
    ///
    /// `policy` only matters for an unbounded call on a diverging input.
    pub fn evaluate(
        &self,
        input: Nat,
        steps: Option<u64>,
        policy: UndefinedPolicy,
    ) -> Result<Option<Nat>, EvalError> {
        let budget = steps.map(Steps::new).transpose()?;
        match budget {
            Some(budget) => Ok(self.evaluate_within(input, budget)),
            None => self.evaluate_unbounded(input, policy),
        }
    }

    /// Evaluate on `input` with a validated budget.
    #[must_use]
    pub fn evaluate_within(&self, input: Nat, budget: Steps) -> Option<Nat> {
        let value = self.outcome(input).and_then(|out| out.within(budget));
        tracing::trace!(
            function = %self,
            input,
            budget = budget.get(),
            halted = value.is_some(),
            value = ?value,
            "bounded evaluation"
        );
        value
    }

    /// Smallest budget, no larger than `within`, under which `input` halts.
    ///
    /// Found by bisection over bounded evaluations, relying on larger budgets
    /// never losing a result. This is the exact cost of the computation.
    #[must_use]
    pub fn halting_steps(&self, input: Nat, within: Steps) -> Option<Steps> {
        self.evaluate_within(input, within)?;
        let (mut low, mut high) = (1, within.get());
        while low < high {
            let mid = low + (high - low) / 2;
            let probe = Steps::new(mid).ok()?;
            if self.evaluate_within(input, probe).is_some() {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        Steps::new(high).ok()
    }

    /// Evaluate on `input` with no budget at all.
    pub fn evaluate_unbounded(
        &self,
        input: Nat,
        policy: UndefinedPolicy,
    ) -> Result<Option<Nat>, EvalError> {
        if let Some(out) = self.outcome(input) {
            tracing::trace!(function = %self, input, value = out.value, "unbounded evaluation");
            return Ok(Some(out.value));
        }
        tracing::debug!(function = %self, input, policy = policy.as_str(), "runs forever");
        match policy {
            UndefinedPolicy::Abort => Err(EvalError::Diverges {
                function: self.name().to_string(),
                input,
            }),
            UndefinedPolicy::Continue => Ok(None),
        }
    }
}
