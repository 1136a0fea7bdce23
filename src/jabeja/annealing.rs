//! Saw-tooth geometric cooling.

/// Temperature below which the schedule restarts.
pub const TEMPERATURE_FLOOR: f64 = 0.01;

/// Geometric cooling with restart-on-freeze.
///
/// After every round `T <- T * (1 - delta)`. A result under
/// [`TEMPERATURE_FLOOR`] is replaced by the initial temperature in the
/// same update.
#[derive(Debug, Clone)]
pub struct AnnealingSchedule {
    initial: f64,
    delta: f64,
    temperature: f64,
    restarts: usize,
}

impl AnnealingSchedule {
    pub fn new(initial: f64, delta: f64) -> Self {
        Self {
            initial,
            delta,
            temperature: initial,
            restarts: 0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial
    }

    /// Number of restarts so far.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Applies one round of cooling. Returns `true` if it restarted.
    pub fn cool(&mut self) -> bool {
        self.temperature *= 1.0 - self.delta;
        if self.temperature < TEMPERATURE_FLOOR {
            self.temperature = self.initial;
            self.restarts += 1;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halving() {
        let mut s = AnnealingSchedule::new(1.0, 0.5);
        s.cool();
        assert!((s.temperature() - 0.5).abs() < 1e-12);
        s.cool();
        assert!((s.temperature() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_restart_on_same_update() {
        let mut s = AnnealingSchedule::new(1.0, 0.5);
        // 0.5, 0.25, 0.125, 0.0625, 0.03125, 0.015625
        for _ in 0..6 {
            assert!(!s.cool());
        }
        assert!((s.temperature() - 0.015625).abs() < 1e-12);
        // 0.0078125 < 0.01 resets immediately.
        assert!(s.cool());
        assert!((s.temperature() - 1.0).abs() < 1e-12);
        assert_eq!(s.restarts(), 1);
    }

    #[test]
    fn test_zero_delta_is_constant() {
        let mut s = AnnealingSchedule::new(2.0, 0.0);
        for _ in 0..100 {
            s.cool();
        }
        assert!((s.temperature() - 2.0).abs() < 1e-12);
        assert_eq!(s.restarts(), 0);
    }

    #[test]
    fn test_fast_decay_restarts_every_round() {
        let mut s = AnnealingSchedule::new(1.0, 0.999);
        assert!(s.cool());
        assert!(s.cool());
        assert_eq!(s.restarts(), 2);
        assert!((s.temperature() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sawtooth_stays_in_range() {
        let mut s = AnnealingSchedule::new(2.0, 0.1);
        for _ in 0..500 {
            s.cool();
            assert!(s.temperature() >= TEMPERATURE_FLOOR);
            assert!(s.temperature() <= 2.0);
        }
        assert!(s.restarts() > 0);
    }
}
