//! Signal Strength Calculator - Momentum adjusted for urgency and triggers.

use crate::domain::foundation::Percentage;
use crate::domain::jtbd::{IntensityScore, TriggerWindow};

/// Points added when a recent contract loss was recorded.
pub const CONTRACT_LOSS_BONUS: f64 = 15.0;

/// Calculator for composite buying-signal strength.
pub struct SignalStrengthCalculator;

impl SignalStrengthCalculator {
    /// Adjusts momentum by decision window, pain intensity and contract loss.
    ///
    /// - window: immediate +20, short +10, medium 0, long -10, undefined or
    ///   unset -5
    /// - intensity (when set): `(intensity - 5.5) × 3`
    /// - contract loss: +15
    ///
    /// The sum is rounded and clamped to 0-100.
    pub fn compute(
        momentum: Percentage,
        window: Option<TriggerWindow>,
        intensity: Option<IntensityScore>,
        contract_loss: bool,
    ) -> Percentage {
        let mut signal = f64::from(momentum.value());
        signal += f64::from(TriggerWindow::adjustment_for(window));
        if let Some(intensity) = intensity {
            signal += intensity.signal_adjustment();
        }
        if contract_loss {
            signal += CONTRACT_LOSS_BONUS;
        }
        Percentage::from_score(signal)
    }
}
