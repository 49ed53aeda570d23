// Shake animation for the dot row
//
// Plays the classic attention shake as a horizontal offset in cells.
// Keyframes are fractions of the amplitude, evenly spaced over the duration,
// with linear interpolation between them.

use crate::config::ShakeConfig;
use crate::pin::Attention;
use std::time::{Duration, Instant};

/// Horizontal displacement keyframes, as fractions of the amplitude
const KEYFRAMES: [f32; 10] = [0.0, 1.0, -1.0, 1.0, -1.0, 0.6, -0.6, 0.24, -0.24, 0.0];

/// Time-driven shake, started by [`Attention::play`]
#[derive(Debug, Clone)]
pub struct Shake {
    started_at: Option<Instant>,
    duration: Duration,
    amplitude: u16,
    plays: usize,
}

impl Shake {
    pub fn new(config: ShakeConfig) -> Self {
        Self {
            started_at: None,
            duration: Duration::from_millis(config.duration_ms),
            amplitude: config.amplitude,
            plays: 0,
        }
    }

    /// Whether the animation is still running
    pub fn is_active(&self) -> bool {
        self.started_at
            .is_some_and(|start| start.elapsed() < self.duration)
    }

    /// Number of times the animation has been started
    pub fn plays(&self) -> usize {
        self.plays
    }

    /// Current offset in cells (0 when idle)
    pub fn offset(&self) -> i16 {
        match self.started_at {
            Some(start) => self.offset_at(start.elapsed()),
            None => 0,
        }
    }

    /// Offset `elapsed` after the animation started
    pub fn offset_at(&self, elapsed: Duration) -> i16 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 0;
        }

        let segments = (KEYFRAMES.len() - 1) as f32;
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32() * segments;
        let index = (progress.floor() as usize).min(KEYFRAMES.len() - 2);
        let t = progress - index as f32;
        let value = KEYFRAMES[index] + (KEYFRAMES[index + 1] - KEYFRAMES[index]) * t;

        (value * f32::from(self.amplitude)).round() as i16
    }

    /// Drop the start time once the animation has finished
    pub fn settle(&mut self) {
        if self.started_at.is_some() && !self.is_active() {
            self.started_at = None;
        }
    }
}

impl Attention for Shake {
    fn play(&mut self) {
        self.started_at = Some(Instant::now());
        self.plays += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shake() -> Shake {
        Shake::new(ShakeConfig {
            duration_ms: 900,
            amplitude: 4,
        })
    }

    #[test]
    fn test_idle_has_no_offset() {
        let s = shake();
        assert!(!s.is_active());
        assert_eq!(s.offset(), 0);
        assert_eq!(s.plays(), 0);
    }

    #[test]
    fn test_keyframes() {
        let s = shake();
        // 900ms over 9 segments: one keyframe every 100ms
        assert_eq!(s.offset_at(Duration::ZERO), 0);
        assert_eq!(s.offset_at(Duration::from_millis(100)), 4);
        assert_eq!(s.offset_at(Duration::from_millis(200)), -4);
        assert_eq!(s.offset_at(Duration::from_millis(500)), 2);
        // Halfway between 4 and -4
        assert_eq!(s.offset_at(Duration::from_millis(150)), 0);
    }

    #[test]
    fn test_offset_is_zero_after_duration() {
        let s = shake();
        assert_eq!(s.offset_at(Duration::from_millis(900)), 0);
        assert_eq!(s.offset_at(Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_play_starts_animation() {
        let mut s = shake();
        s.play();
        assert!(s.is_active());
        assert_eq!(s.plays(), 1);
    }

    #[test]
    fn test_zero_duration_never_moves() {
        let mut s = Shake::new(ShakeConfig {
            duration_ms: 0,
            amplitude: 4,
        });
        s.play();
        assert!(!s.is_active());
        assert_eq!(s.offset(), 0);
        s.settle();
        assert_eq!(s.offset(), 0);
    }
}
