use bevy::prelude::*;

/// Fallback fade duration (seconds) used when a caller asks for a
/// non-positive one.
pub const DEFAULT_FADE_DURATION: f32 = 0.75;

/// Direction of the active fade, if any. Mutually exclusive by construction:
/// starting one direction replaces the other immediately, with no blending
/// of rates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum FadeDirection {
    /// No fade in progress; alpha holds its value.
    #[default]
    Idle,
    /// Alpha rising toward full coverage.
    ToBlack,
    /// Alpha falling toward fully clear.
    ToClear,
}

/// Written exactly once per fade-to-black, on the frame alpha first
/// reaches full coverage.
#[derive(Message)]
pub struct ScreenBlack;

/// Shared screen-coverage state: one alpha in `[0, 1]`, a direction, and
/// the per-second rate derived from the requested duration.
///
/// Lives for the whole process; rendering reads [`Self::alpha`], everything
/// else goes through the fade/jump commands.
#[derive(Resource, Default, Reflect)]
pub struct ScreenFade {
    alpha: f32,
    direction: FadeDirection,
    rate: f32,
}

impl ScreenFade {
    /// Starts fading toward fully clear over `duration` seconds, cancelling
    /// any fade-to-black in progress.
    pub fn fade_to_clear(&mut self, duration: f32) {
        self.rate = 1.0 / Self::checked_duration(duration);
        self.direction = FadeDirection::ToClear;
    }

    /// Starts fading toward full black over `duration` seconds, cancelling
    /// any fade-to-clear in progress.
    pub fn fade_to_black(&mut self, duration: f32) {
        self.rate = 1.0 / Self::checked_duration(duration);
        self.direction = FadeDirection::ToBlack;
    }

    /// Sets alpha to fully clear immediately.
    ///
    /// Deliberately leaves the direction alone: an in-flight fade keeps
    /// going on the next tick and will override the jump. Matches the
    /// long-standing behavior callers rely on for hard scene cuts.
    #[allow(dead_code)]
    pub fn jump_to_clear(&mut self) {
        self.alpha = 0.0;
    }

    /// Sets alpha to full black immediately. Same direction caveat as
    /// [`Self::jump_to_clear`].
    #[allow(dead_code)]
    pub fn jump_to_black(&mut self) {
        self.alpha = 1.0;
    }

    /// Advances the fade by `dt` seconds of unscaled time.
    ///
    /// Returns `true` on the single call where a fade-to-black first
    /// reaches full coverage; the caller turns that into a
    /// [`ScreenBlack`] message. Reaching fully clear reports nothing.
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.direction {
            FadeDirection::Idle => false,
            FadeDirection::ToBlack => {
                self.alpha += dt * self.rate;
                if self.alpha >= 1.0 {
                    self.alpha = 1.0;
                    self.direction = FadeDirection::Idle;
                    return true;
                }
                false
            }
            FadeDirection::ToClear => {
                self.alpha -= dt * self.rate;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.direction = FadeDirection::Idle;
                }
                false
            }
        }
    }

    /// Current screen coverage in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The active fade direction.
    #[allow(dead_code)]
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    fn checked_duration(duration: f32) -> f32 {
        if duration > 0.0 {
            duration
        } else {
            warn!(
                "fade duration {duration} is not positive, using default {DEFAULT_FADE_DURATION}"
            );
            DEFAULT_FADE_DURATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fade-to-black ───────────────────────────────────────────────

    #[test]
    fn to_black_reaches_exactly_one_and_reports_once() {
        let mut fade = ScreenFade::default();
        fade.fade_to_black(1.0);
        assert!(!fade.advance(0.4));
        assert!(!fade.advance(0.4));
        assert!(fade.advance(0.4), "crossing 1.0 must report");
        assert_eq!(fade.alpha(), 1.0);
        assert_eq!(fade.direction(), FadeDirection::Idle);
        // Further ticks hold at black and stay silent.
        assert!(!fade.advance(0.4));
        assert_eq!(fade.alpha(), 1.0);
    }

    #[test]
    fn to_black_is_step_size_independent() {
        // Same duration, very different tick splits, same outcome.
        for steps in [1usize, 3, 7, 100] {
            let mut fade = ScreenFade::default();
            fade.fade_to_black(0.5);
            let dt = 0.5 / steps as f32;
            let mut reports = 0;
            for _ in 0..steps {
                if fade.advance(dt + 1e-6) {
                    reports += 1;
                }
            }
            assert_eq!(fade.alpha(), 1.0, "{steps} steps");
            assert_eq!(reports, 1, "{steps} steps");
        }
    }

    #[test]
    fn to_black_alpha_rises_linearly() {
        let mut fade = ScreenFade::default();
        fade.fade_to_black(2.0);
        fade.advance(0.5);
        assert!((fade.alpha() - 0.25).abs() < 1e-6);
        fade.advance(0.5);
        assert!((fade.alpha() - 0.5).abs() < 1e-6);
    }

    // ── fade-to-clear ───────────────────────────────────────────────

    #[test]
    fn to_clear_reaches_exactly_zero_without_reporting() {
        let mut fade = ScreenFade::default();
        fade.jump_to_black();
        fade.fade_to_clear(1.0);
        for _ in 0..5 {
            assert!(!fade.advance(0.3));
        }
        assert_eq!(fade.alpha(), 0.0);
        assert_eq!(fade.direction(), FadeDirection::Idle);
    }

    // ── direction replacement ───────────────────────────────────────

    #[test]
    fn new_direction_replaces_active_fade_without_blending() {
        let mut fade = ScreenFade::default();
        fade.fade_to_black(1.0);
        fade.advance(0.5);
        assert!((fade.alpha() - 0.5).abs() < 1e-6);
        fade.fade_to_clear(1.0);
        fade.advance(0.5);
        assert_eq!(fade.alpha(), 0.0, "0.5 of clearing undoes 0.5 of cover");
    }

    #[test]
    fn restarting_same_direction_adopts_new_rate() {
        let mut fade = ScreenFade::default();
        fade.fade_to_black(10.0);
        fade.advance(1.0);
        assert!((fade.alpha() - 0.1).abs() < 1e-6);
        fade.fade_to_black(0.1);
        assert!(fade.advance(0.1));
        assert_eq!(fade.alpha(), 1.0);
    }

    // ── jumps ───────────────────────────────────────────────────────

    #[test]
    fn jump_black_then_clear_lands_on_zero_silently() {
        let mut fade = ScreenFade::default();
        fade.jump_to_black();
        assert_eq!(fade.alpha(), 1.0);
        fade.jump_to_clear();
        assert_eq!(fade.alpha(), 0.0);
        assert!(!fade.advance(1.0), "no fade was ever started");
    }

    #[test]
    fn jump_does_not_cancel_an_active_fade() {
        // Historical quirk, kept on purpose: the jump moves alpha but the
        // in-flight fade direction survives and keeps ticking.
        let mut fade = ScreenFade::default();
        fade.fade_to_black(1.0);
        fade.advance(0.2);
        fade.jump_to_clear();
        assert_eq!(fade.alpha(), 0.0);
        assert_eq!(fade.direction(), FadeDirection::ToBlack);
        fade.advance(0.5);
        assert!((fade.alpha() - 0.5).abs() < 1e-6);
    }

    // ── duration validation ─────────────────────────────────────────

    #[test]
    fn non_positive_duration_falls_back_to_default() {
        let mut fade = ScreenFade::default();
        fade.fade_to_black(0.0);
        fade.advance(DEFAULT_FADE_DURATION / 2.0);
        assert!((fade.alpha() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn idle_fade_ignores_ticks() {
        let mut fade = ScreenFade::default();
        assert!(!fade.advance(10.0));
        assert_eq!(fade.alpha(), 0.0);
    }
}
