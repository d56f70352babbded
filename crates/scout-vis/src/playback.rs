//! Playback over a recorded search trace.
//!
//! A player is a cursor into the `steps` of a finished run: the cursor
//! always points at the step currently shown, clamped to the trace. The
//! player reads the statuses the engine recorded — auto-run halts on the
//! terminal step (goal found or exhaustion), and seeking can target a
//! status directly. The engine is never re-invoked; the player owns its
//! copy of the trace.

use std::time::Duration;

use scout_search::{SearchStatus, StepEvent};
use serde::{Deserialize, Serialize};

/// Auto-run speed, as a multiplier over a renderer's base step interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackSpeed {
    /// Half the base rate.
    Slow,
    /// The base rate.
    Normal,
    /// Twice the base rate.
    Fast,
    /// No timer at all: the caller jumps straight to the terminal step.
    Instant,
}

impl PlaybackSpeed {
    /// Time between shown steps, or `None` for [`PlaybackSpeed::Instant`].
    pub fn step_interval(&self, base: Duration) -> Option<Duration> {
        match self {
            PlaybackSpeed::Slow => Some(base * 2),
            PlaybackSpeed::Normal => Some(base),
            PlaybackSpeed::Fast => Some(base / 2),
            PlaybackSpeed::Instant => None,
        }
    }
}

/// Where the player stands in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackState {
    /// Showing the initial event, not yet advancing.
    Idle,
    /// Auto-advancing through the trace.
    Playing,
    /// Halted mid-trace.
    Paused,
    /// Showing the terminal step; there is nothing further to show.
    Done,
}

/// Cursor over the steps of one finished search run.
#[derive(Debug, Clone)]
pub struct TracePlayer {
    steps: Vec<StepEvent>,
    cursor: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
}

impl TracePlayer {
    /// Create a player showing the first step of an owned trace copy.
    ///
    /// A trace of one step (or none) has nothing to advance through and
    /// starts out [`PlaybackState::Done`].
    pub fn new(steps: Vec<StepEvent>) -> Self {
        let state = if steps.len() > 1 {
            PlaybackState::Idle
        } else {
            PlaybackState::Done
        };
        Self {
            steps,
            cursor: 0,
            state,
            speed: PlaybackSpeed::Normal,
        }
    }

    /// The step being shown, if the trace is non-empty.
    pub fn current(&self) -> Option<&StepEvent> {
        self.steps.get(self.cursor)
    }

    /// Index of the shown step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the trace.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current auto-run speed.
    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Set the auto-run speed.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Status of the run as recorded: the last step's status, or `None`
    /// for an empty trace.
    pub fn final_status(&self) -> Option<SearchStatus> {
        self.steps.last().map(|s| s.status)
    }

    /// Begin auto-advancing. A player already done rewinds first, so play
    /// always animates from somewhere.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Done {
            self.cursor = 0;
        }
        self.state = if self.at_last() {
            PlaybackState::Done
        } else {
            PlaybackState::Playing
        };
    }

    /// Halt auto-advance, keeping the cursor in place.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Return to the initial event.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.state = if self.steps.len() > 1 {
            PlaybackState::Idle
        } else {
            PlaybackState::Done
        };
    }

    /// Show the next step.
    ///
    /// Halts with [`PlaybackState::Done`] on the step carrying a terminal
    /// status — the goal-found step of a successful run — which in a
    /// recorded trace is also the last. Returns `None` once there is
    /// nothing further to show.
    pub fn advance(&mut self) -> Option<&StepEvent> {
        if self.at_last() {
            self.state = PlaybackState::Done;
            return None;
        }
        self.cursor += 1;
        if self.steps[self.cursor].status.is_terminal() || self.at_last() {
            self.state = PlaybackState::Done;
        }
        self.steps.get(self.cursor)
    }

    /// Show the previous step. Stepping back from the terminal step
    /// re-opens the trace as paused.
    pub fn retreat(&mut self) -> Option<&StepEvent> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.state = PlaybackState::Paused;
        self.steps.get(self.cursor)
    }

    /// Jump to a step by index, clamped to the trace bounds.
    pub fn seek(&mut self, index: usize) {
        if self.steps.is_empty() {
            return;
        }
        self.cursor = index.min(self.steps.len() - 1);
        self.state = if self.at_last() {
            PlaybackState::Done
        } else {
            PlaybackState::Paused
        };
    }

    /// Jump to the first step recorded with the given status.
    ///
    /// Returns whether such a step exists; the cursor is untouched
    /// otherwise.
    pub fn seek_to_status(&mut self, status: SearchStatus) -> bool {
        match self.steps.iter().position(|s| s.status == status) {
            Some(index) => {
                self.seek(index);
                true
            }
            None => false,
        }
    }

    /// Jump to the step that found the goal, if the run succeeded.
    pub fn jump_to_goal(&mut self) -> bool {
        self.seek_to_status(SearchStatus::GoalFound)
    }

    /// Jump to the last step (what [`PlaybackSpeed::Instant`] asks for).
    pub fn jump_to_end(&mut self) {
        if !self.steps.is_empty() {
            self.seek(self.steps.len() - 1);
        }
    }

    /// Fraction of the trace shown so far: 0.0 at the initial event, 1.0
    /// on the terminal step.
    pub fn progress(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 1.0,
            len => self.cursor as f64 / (len - 1) as f64,
        }
    }

    fn at_last(&self) -> bool {
        self.steps.len() <= 1 || self.cursor + 1 == self.steps.len()
    }
}

/// Player summary for external consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatus {
    pub cursor: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: PlaybackSpeed,
    pub progress: f64,
    pub final_status: Option<SearchStatus>,
}

impl From<&TracePlayer> for PlaybackStatus {
    fn from(player: &TracePlayer) -> Self {
        Self {
            cursor: player.cursor,
            total_steps: player.len(),
            state: player.state,
            speed: player.speed,
            progress: player.progress(),
            final_status: player.final_status(),
        }
    }
}
