//! Friction loss along a hose segment.
//!
//! Empirical fire-service model: loss grows linearly with length and with flow,
//! scaled by a per-bore factor. Factors are expressed in bar per 100 m at
//! 1000 LPM.

use ar_project::EdgeDef;

use crate::policy::HydraulicPolicy;

/// Pressure loss per 100 m of hose (bar).
#[inline]
pub fn loss_per_100m(factor: f64, flow_lpm: f64) -> f64 {
    factor * (flow_lpm / 1000.0)
}

/// Total pressure loss across one hose (bar).
pub fn segment_loss(policy: &HydraulicPolicy, hose: &EdgeDef) -> f64 {
    let factor = policy.loss_factor(hose.diameter_mm);
    (hose.length_meters / 100.0) * loss_per_100m(factor, hose.target_flow_lpm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::edge;
    use proptest::prelude::*;

    #[test]
    fn reference_segment() {
        // 100 m of 45 mm at 500 LPM
        let hose = edge("e", "a", "b", 100.0, 45.0, 500.0);
        let loss = segment_loss(&HydraulicPolicy::default(), &hose);
        assert!((loss - 0.3).abs() < 1e-12);
    }

    #[test]
    fn uncalibrated_bore_uses_default_factor() {
        let hose = edge("e", "a", "b", 200.0, 50.0, 1000.0);
        let loss = segment_loss(&HydraulicPolicy::default(), &hose);
        assert!((loss - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_or_flow_is_lossless() {
        let policy = HydraulicPolicy::default();
        assert_eq!(segment_loss(&policy, &edge("e", "a", "b", 0.0, 38.0, 800.0)), 0.0);
        assert_eq!(segment_loss(&policy, &edge("e", "a", "b", 80.0, 38.0, 0.0)), 0.0);
    }

    proptest! {
        #[test]
        fn loss_monotone_in_length_and_flow(
            len in 0.0_f64..1000.0,
            extra_len in 0.0_f64..500.0,
            flow in 0.0_f64..3000.0,
            extra_flow in 0.0_f64..1000.0,
        ) {
            let policy = HydraulicPolicy::default();
            let base = segment_loss(&policy, &edge("e", "a", "b", len, 45.0, flow));
            let longer = segment_loss(&policy, &edge("e", "a", "b", len + extra_len, 45.0, flow));
            let busier = segment_loss(&policy, &edge("e", "a", "b", len, 45.0, flow + extra_flow));
            prop_assert!(base >= 0.0);
            prop_assert!(longer >= base);
            prop_assert!(busier >= base);
        }
    }
}
