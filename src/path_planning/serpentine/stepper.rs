//! The 4-tick cycle that advances the primary axis

/// Tick on which the small step is applied
pub const STEP_TICK: u8 = 2;
/// Tick on which the space step is applied and the cycle restarts
pub const SPACE_STEP_TICK: u8 = 4;

/// Counter driving primary-axis advances
///
/// Each call to [`PrimaryStepper::advance`] is one tick. The counter starts at
/// 0, so the first cycle is five ticks long (0..=4) and every later cycle is
/// four (1..=4), because the reset to 0 is followed by the regular increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimaryStepper {
    counter: u8,
}

impl PrimaryStepper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Advance one tick and return the primary-axis offset for it, if any.
    pub fn advance(&mut self, step: f64, space_step: f64) -> Option<f64> {
        let offset = match self.counter {
            STEP_TICK => Some(step),
            SPACE_STEP_TICK => {
                self.counter = 0;
                Some(space_step)
            }
            _ => None,
        };
        self.counter += 1;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_pattern() {
        let mut stepper = PrimaryStepper::new();
        let offsets: Vec<Option<f64>> = (0..13).map(|_| stepper.advance(1.0, 3.0)).collect();
        assert_eq!(
            offsets,
            vec![
                None, None, Some(1.0), None, Some(3.0),
                None, Some(1.0), None, Some(3.0),
                None, Some(1.0), None, Some(3.0),
            ]
        );
    }

    #[test]
    fn test_counter_resets() {
        let mut stepper = PrimaryStepper::new();
        for _ in 0..5 {
            stepper.advance(1.0, 3.0);
        }
        assert_eq!(stepper.counter(), 1);
    }

    #[test]
    fn test_signs_pass_through() {
        let mut stepper = PrimaryStepper::new();
        let total: f64 = (0..9).filter_map(|_| stepper.advance(-1.0, -3.0)).sum();
        assert_eq!(total, -8.0);
    }
}
