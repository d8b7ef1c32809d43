//! Entrance animation state for the form and success views

use std::time::{Duration, Instant};

/// How a view enters the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// Content rises into place from a few rows below
    SlideUp,
    /// Content grows from 80% to full width
    ScaleIn,
}

/// Entrance animation state
#[derive(Debug, Clone)]
pub struct RevealState {
    /// When the view appeared
    pub start_time: Instant,
    pub style: RevealStyle,
    /// Eased progress, 0.0 to 1.0
    pub progress: f32,
}

impl RevealState {
    /// Duration of the entrance animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(500);
    /// Rows the slide-up animation starts below its resting place
    const SLIDE_ROWS: f32 = 4.0;
    /// Starting scale of the scale-in animation
    const INITIAL_SCALE: f32 = 0.8;

    pub fn new(style: RevealStyle) -> Self {
        Self::started_at(style, Instant::now())
    }

    pub fn started_at(style: RevealStyle, start_time: Instant) -> Self {
        Self {
            start_time,
            style,
            progress: 0.0,
        }
    }

    /// Update animation progress based on elapsed time
    pub fn update(&mut self) {
        let elapsed = self.start_time.elapsed();
        let linear =
            (elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // Cubic ease-out for smooth deceleration
        self.progress = simple_easing::cubic_out(linear);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Time since the view appeared, used for spinners and pulsing text
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Rows to push the content down (slide-up only)
    pub fn row_offset(&self) -> u16 {
        match self.style {
            RevealStyle::SlideUp => ((1.0 - self.progress) * Self::SLIDE_ROWS).round() as u16,
            RevealStyle::ScaleIn => 0,
        }
    }

    /// Width multiplier (scale-in only)
    pub fn scale(&self) -> f32 {
        match self.style {
            RevealStyle::SlideUp => 1.0,
            RevealStyle::ScaleIn => {
                Self::INITIAL_SCALE + (1.0 - Self::INITIAL_SCALE) * self.progress
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_ago(style: RevealStyle, ago: Duration) -> RevealState {
        let start = Instant::now()
            .checked_sub(ago)
            .unwrap_or_else(Instant::now);
        RevealState::started_at(style, start)
    }

    #[test]
    fn test_new_starts_at_zero_progress() {
        let state = RevealState::new(RevealStyle::SlideUp);
        assert_eq!(state.progress, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_slide_up_starts_below_resting_place() {
        let state = RevealState::new(RevealStyle::SlideUp);
        assert_eq!(state.row_offset(), 4);
        assert_eq!(state.scale(), 1.0);
    }

    #[test]
    fn test_scale_in_starts_smaller() {
        let state = RevealState::new(RevealStyle::ScaleIn);
        assert!((state.scale() - 0.8).abs() < f32::EPSILON);
        assert_eq!(state.row_offset(), 0);
    }

    #[test]
    fn test_update_completes_after_duration() {
        let mut state = started_ago(RevealStyle::ScaleIn, Duration::from_secs(2));
        state.update();
        assert!(state.is_complete());
        assert!((state.scale() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_completed_slide_up_has_no_offset() {
        let mut state = started_ago(RevealStyle::SlideUp, Duration::from_secs(2));
        state.update();
        assert_eq!(state.row_offset(), 0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut early = started_ago(RevealStyle::SlideUp, Duration::from_millis(100));
        let mut late = started_ago(RevealStyle::SlideUp, Duration::from_millis(300));
        early.update();
        late.update();
        assert!(late.progress >= early.progress);
        assert!(late.progress <= 1.0);
    }
}
