//! Hysteresis state machine for the binary laughing decision.
//!
//! Entering laughter requires a short run of above-threshold frames while
//! exiting requires a longer run of below-threshold frames, so the machine
//! is quick to notice a laugh and slow to declare it over. Transition
//! moments are surfaced as values for diagnostic logging and never feed back
//! into the decision logic.

/// Binary laugh state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaughState {
    NotLaughing,
    Laughing,
}

/// A state transition observed on the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Entered `Laughing`
    Started,
    /// Returned to `NotLaughing`
    Stopped,
}

/// Consecutive-frame hysteresis machine
pub struct HysteresisStateMachine {
    frames_to_start: usize,
    frames_to_stop: usize,
    state: LaughState,
    consecutive_laugh_frames: usize,
    consecutive_non_laugh_frames: usize,
}

impl HysteresisStateMachine {
    #[must_use]
    pub fn new(frames_to_start: usize, frames_to_stop: usize) -> Self {
        Self {
            frames_to_start,
            frames_to_stop,
            state: LaughState::NotLaughing,
            consecutive_laugh_frames: 0,
            consecutive_non_laugh_frames: 0,
        }
    }

    /// Advance the machine with one qualifying frame's threshold comparison
    ///
    /// Returns the transition if the state changed on this frame.
    pub fn observe(&mut self, above_threshold: bool) -> Option<Transition> {
        if above_threshold {
            self.consecutive_laugh_frames += 1;
            self.consecutive_non_laugh_frames = 0;
        } else {
            self.consecutive_non_laugh_frames += 1;
            self.consecutive_laugh_frames = 0;
        }

        let next = match self.state {
            LaughState::NotLaughing => {
                if self.consecutive_laugh_frames >= self.frames_to_start {
                    LaughState::Laughing
                } else {
                    LaughState::NotLaughing
                }
            }
            LaughState::Laughing => {
                if self.consecutive_non_laugh_frames < self.frames_to_stop {
                    LaughState::Laughing
                } else {
                    LaughState::NotLaughing
                }
            }
        };

        let transition = match (self.state, next) {
            (LaughState::NotLaughing, LaughState::Laughing) => Some(Transition::Started),
            (LaughState::Laughing, LaughState::NotLaughing) => Some(Transition::Stopped),
            _ => None,
        };
        self.state = next;
        transition
    }

    /// Handle a frame with no detected face: both counters reset but the
    /// current state is kept, so a brief tracking loss does not end a laugh
    /// episode by itself
    pub fn face_lost(&mut self) {
        self.consecutive_laugh_frames = 0;
        self.consecutive_non_laugh_frames = 0;
    }

    /// Return to the initial state with zeroed counters
    pub fn reset(&mut self) {
        self.state = LaughState::NotLaughing;
        self.consecutive_laugh_frames = 0;
        self.consecutive_non_laugh_frames = 0;
    }

    #[must_use]
    pub fn state(&self) -> LaughState {
        self.state
    }

    #[must_use]
    pub fn is_laughing(&self) -> bool {
        self.state == LaughState::Laughing
    }

    #[must_use]
    pub fn consecutive_laugh_frames(&self) -> usize {
        self.consecutive_laugh_frames
    }

    #[must_use]
    pub fn consecutive_non_laugh_frames(&self) -> usize {
        self.consecutive_non_laugh_frames
    }
}
