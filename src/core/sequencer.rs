//! Step sequencer - gated progression through the fixed step order
//!
//! Forward movement is one step at a time and only past a validated step.
//! Backward movement is unrestricted and loses nothing. Jumps are backward
//! only. Advancing off the terminal step does not move; it signals that the
//! configuration is ready to submit.

use crate::core::selection::SelectionState;
use crate::core::validator::{check_step, StepBlocked};

/// The guided steps, in the order the flow walks them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fabric,
    Color,
    Style,
    Measurements,
    Review,
}

const STEP_ORDER: [Step; 5] = [
    Step::Fabric,
    Step::Color,
    Step::Style,
    Step::Measurements,
    Step::Review,
];

impl Step {
    pub fn all() -> &'static [Step] {
        &STEP_ORDER
    }

    pub fn index(&self) -> usize {
        match self {
            Step::Fabric => 0,
            Step::Color => 1,
            Step::Style => 2,
            Step::Measurements => 3,
            Step::Review => 4,
        }
    }

    /// Header shown above the step in the wizard
    pub fn title(&self) -> &'static str {
        match self {
            Step::Fabric => "Suit type & fabric",
            Step::Color => "Color",
            Step::Style => "Style & details",
            Step::Measurements => "Measurements",
            Step::Review => "Review",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Fabric => write!(f, "fabric"),
            Step::Color => write!(f, "color"),
            Step::Style => write!(f, "style"),
            Step::Measurements => write!(f, "measurements"),
            Step::Review => write!(f, "review"),
        }
    }
}

/// Outcome of a successful advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward onto this step
    Moved(Step),
    /// Already on the terminal step and everything validates
    ReadyToSubmit,
}

/// Position tracker over the step order
#[derive(Debug, Clone)]
pub struct StepSequencer {
    current: usize,
    furthest: usize,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            current: 0,
            furthest: 0,
        }
    }

    pub fn current(&self) -> Step {
        STEP_ORDER[self.current]
    }

    /// 1-based position for "Step N of M" displays
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn is_terminal(&self) -> bool {
        self.current == STEP_ORDER.len() - 1
    }

    /// Whether the flow has reached `step` at some point
    pub fn visited(&self, step: Step) -> bool {
        step.index() <= self.furthest
    }

    /// Validate the current step and move forward one
    ///
    /// On a failed check the position does not change and the error names
    /// what is missing. On the terminal step a passing check yields
    /// `ReadyToSubmit` instead of a move.
    pub fn advance(&mut self, state: &SelectionState) -> Result<Advance, StepBlocked> {
        check_step(self.current(), state)?;

        if self.is_terminal() {
            return Ok(Advance::ReadyToSubmit);
        }

        self.current += 1;
        self.furthest = self.furthest.max(self.current);
        Ok(Advance::Moved(self.current()))
    }

    /// Move back one step; `None` when already on the first
    pub fn retreat(&mut self) -> Option<Step> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(self.current())
    }

    /// Jump directly to an earlier (or the current) step
    pub fn jump_to(&mut self, step: Step) -> Result<Step, StepBlocked> {
        if step.index() > self.current {
            return Err(StepBlocked {
                step,
                reason: format!(
                    "cannot skip ahead to {}; steps unlock in order",
                    step
                ),
            });
        }
        self.current = step.index();
        Ok(step)
    }
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}
