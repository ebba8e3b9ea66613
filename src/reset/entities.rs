use bevy::prelude::*;

/// Action the driver must carry out as a result of advancing the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetStep {
    /// The covering wait elapsed and the screen is black: snap the camera
    /// home and start the clearing fade.
    Teleport,
    /// The clearing wait elapsed: the sequence is over and the guard drops.
    Finished,
}

/// Phase of the scripted reset. Teleporting is instantaneous and happens on
/// the `Covering` → `Clearing` edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
enum ResetPhase {
    /// No reset in flight.
    #[default]
    Idle,
    /// Waiting for the cover fade to finish.
    Covering,
    /// Waiting for the clear fade to finish.
    Clearing,
}

/// State machine driving the fade-covered teleport.
///
/// [`Self::request`] is the re-entrancy guard: a second request while the
/// sequence is in flight changes nothing. [`Self::advance`] is fed real
/// (unscaled) frame time and emits each [`ResetStep`] exactly once.
#[derive(Resource, Default, Reflect)]
pub struct ResetSequence {
    phase: ResetPhase,
    timer: f32,
}

impl ResetSequence {
    /// True while a reset is in flight.
    pub fn in_flight(&self) -> bool {
        self.phase != ResetPhase::Idle
    }

    /// Begins a reset. Returns `false`, changing nothing, if one is
    /// already in flight.
    pub fn request(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        self.phase = ResetPhase::Covering;
        self.timer = 0.0;
        true
    }

    /// Advances by `dt` seconds of real time; `wait` is the length of each
    /// timed hold. Frame time past the first wait counts toward the
    /// second, so the whole script takes exactly `2 * wait` regardless of
    /// how frames split it.
    pub fn advance(&mut self, dt: f32, wait: f32) -> Option<ResetStep> {
        match self.phase {
            ResetPhase::Idle => None,
            ResetPhase::Covering => {
                self.timer += dt;
                if self.timer >= wait {
                    self.timer -= wait;
                    self.phase = ResetPhase::Clearing;
                    return Some(ResetStep::Teleport);
                }
                None
            }
            ResetPhase::Clearing => {
                self.timer += dt;
                if self.timer >= wait {
                    self.phase = ResetPhase::Idle;
                    return Some(ResetStep::Finished);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: f32 = 0.5;

    // ── re-entrancy guard ───────────────────────────────────────────

    #[test]
    fn request_is_accepted_only_when_idle() {
        let mut seq = ResetSequence::default();
        assert!(!seq.in_flight());
        assert!(seq.request());
        assert!(seq.in_flight());
        assert!(!seq.request(), "second request while covering is a no-op");

        seq.advance(WAIT, WAIT);
        assert!(seq.in_flight(), "still clearing");
        assert!(!seq.request(), "second request while clearing is a no-op");

        seq.advance(WAIT, WAIT);
        assert!(!seq.in_flight());
        assert!(seq.request(), "accepted again once finished");
    }

    #[test]
    fn rejected_request_does_not_disturb_the_timer() {
        let mut seq = ResetSequence::default();
        seq.request();
        seq.advance(0.3, WAIT);
        seq.request();
        // 0.2s left of the covering wait, not a fresh 0.5s.
        assert_eq!(seq.advance(0.2, WAIT), Some(ResetStep::Teleport));
    }

    // ── timeline ────────────────────────────────────────────────────

    #[test]
    fn full_script_runs_cover_teleport_clear() {
        let mut seq = ResetSequence::default();
        seq.request();
        assert_eq!(seq.advance(0.25, WAIT), None);
        assert_eq!(seq.advance(0.25, WAIT), Some(ResetStep::Teleport));
        assert_eq!(seq.advance(0.25, WAIT), None);
        assert_eq!(seq.advance(0.25, WAIT), Some(ResetStep::Finished));
        assert!(!seq.in_flight());
    }

    #[test]
    fn each_step_is_emitted_exactly_once() {
        let mut seq = ResetSequence::default();
        seq.request();
        let mut teleports = 0;
        let mut finishes = 0;
        // 2 seconds of 60 fps frames covers the 1-second script twice over.
        for _ in 0..120 {
            match seq.advance(1.0 / 60.0, WAIT) {
                Some(ResetStep::Teleport) => teleports += 1,
                Some(ResetStep::Finished) => finishes += 1,
                None => {}
            }
        }
        assert_eq!(teleports, 1);
        assert_eq!(finishes, 1);
    }

    #[test]
    fn overshoot_of_the_first_wait_counts_toward_the_second() {
        let mut seq = ResetSequence::default();
        seq.request();
        // One long 0.7s frame: teleport fires, 0.2s already spent clearing.
        assert_eq!(seq.advance(0.7, WAIT), Some(ResetStep::Teleport));
        assert_eq!(seq.advance(0.3, WAIT), Some(ResetStep::Finished));
    }

    #[test]
    fn idle_sequence_ignores_ticks() {
        let mut seq = ResetSequence::default();
        assert_eq!(seq.advance(10.0, WAIT), None);
        assert!(!seq.in_flight());
    }
}
