//! DEBtox process functions.
//!
//! Pure functions for each step of the derivative evaluation. All inputs and
//! outputs are f64.

use crate::{
    constants::HAZARD_CAP, feedback::FeedbackSwitches, moa::ModeOfAction, params::Parameters,
};

/// Background hazard at `time`, with Weibull shape `a`.
///
/// Equals `hb` when `a == 1` and zero when `hb == 0`; otherwise
/// `a * hb^a * t^(a - 1)`, with negative times read as zero and the result
/// capped at [`HAZARD_CAP`]. The cap keeps the hazard finite at `t = 0` when
/// `a < 1`.
#[must_use]
pub fn background_hazard(hb: f64, a: f64, time: f64) -> f64 {
    if a == 1.0 || hb == 0.0 {
        hb
    } else {
        (a * hb.powf(a) * time.max(0.0).powf(a - 1.0)).min(HAZARD_CAP)
    }
}

/// Scaled functional response at body length `length`.
///
/// Reduced hyperbolically with body volume when `lf > 0`, and proportionally
/// below the metamorphosis length when `lj > 0`.
#[must_use]
pub fn feeding(f: f64, length: f64, lf: f64, lj: f64) -> f64 {
    let mut f = f;
    if lf > 0.0 {
        f /= 1.0 + lf.powi(3) / length.powi(3);
    }
    if lj > 0.0 {
        f *= (length / lj).min(1.0);
    }
    f
}

/// Stress level on the energy budget.
#[must_use]
pub fn stress(damage: f64, zb: f64, bb: f64) -> f64 {
    bb * (damage - zb).max(0.0)
}

/// Toxicant hazard rate, capped at [`HAZARD_CAP`].
#[must_use]
pub fn hazard(damage: f64, zs: f64, bs: f64) -> f64 {
    (bs * (damage - zs).max(0.0)).min(HAZARD_CAP)
}

/// Stress factors on each metabolic process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stress {
    /// On assimilation; never above one.
    pub assimilation: f64,
    pub maintenance: f64,
    pub growth: f64,
    pub reproduction: f64,
    pub hazard_reproduction: f64,
}

impl Stress {
    /// Distributes stress level `s` over the processes weighted by `moa`.
    #[must_use]
    pub fn new(s: f64, moa: &ModeOfAction) -> Self {
        Self {
            assimilation: (moa.assimilation * s).min(1.0),
            maintenance: moa.maintenance * s,
            growth: moa.growth * s,
            reproduction: moa.reproduction * s,
            hazard_reproduction: moa.hazard_reproduction * s,
        }
    }
}

/// Body growth and the functional response left for reproduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    /// Rate of change of body length [mm/d].
    pub rate: f64,

    /// Scaled functional response available for reproduction [-].
    pub f_repro: f64,
}

/// Computes growth, applying the starvation rules.
///
/// Without starvation, length follows von Bertalanffy growth. When that rate
/// is negative, reproduction first covers the maintenance deficit (zero
/// growth); if it cannot, reproduction stops and the organism shrinks.
#[must_use]
pub fn growth(p: &Parameters, f: f64, length: f64, s: &Stress) -> Growth {
    let (sa, sm, sg) = (s.assimilation, s.maintenance, s.growth);

    let rate = p.rb * ((1.0 + sm) / (1.0 + sg)) * (f * p.lm * ((1.0 - sa) / (1.0 + sm)) - length);
    if rate < 0.0 {
        let f_repro = (f - p.kap * (length / p.lm) * ((1.0 + sm) / (1.0 - sa))) / (1.0 - p.kap);
        if f_repro >= 0.0 {
            return Growth { rate: 0.0, f_repro };
        }

        let shrink =
            (p.rb * (1.0 + sm) / p.yp) * ((f * p.lm / p.kap) * ((1.0 - sa) / (1.0 + sm)) - length);
        return Growth {
            rate: shrink,
            f_repro: 0.0,
        };
    }

    Growth { rate, f_repro: f }
}

/// Reproduction rate [#/d]; zero below the puberty length.
#[must_use]
pub fn reproduction(p: &Parameters, f_repro: f64, length: f64, s: &Stress) -> f64 {
    if length < p.lp {
        return 0.0;
    }

    let (sa, sm) = (s.assimilation, s.maintenance);
    let max_rate = (-s.hazard_reproduction).exp() * p.rm / (1.0 + s.reproduction);
    let budget = f_repro * p.lm * length.powi(2) * (1.0 - sa) - p.lp.powi(3) * (1.0 + sm);

    (max_rate * budget / (p.lm.powi(3) - p.lp.powi(3))).max(0.0)
}

/// Factors scaling the damage dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feedbacks {
    pub uptake: f64,
    pub elimination: f64,
    pub growth_dilution: f64,
    pub reproduction_loss: f64,
}

impl Feedbacks {
    /// Computes feedback factors from the switches and current rates.
    ///
    /// Disabled surface:volume factors are one rather than zero, and growth
    /// dilution never concentrates damage in shrinking organisms.
    #[must_use]
    pub fn new(
        switches: &FeedbackSwitches,
        p: &Parameters,
        length: f64,
        growth_rate: f64,
        repro_rate: f64,
    ) -> Self {
        let unit_if_off = |x: f64| if x == 0.0 { 1.0 } else { x };

        Self {
            uptake: unit_if_off(switches.uptake * p.lm_ref / length),
            elimination: unit_if_off(switches.elimination * p.lm_ref / length),
            growth_dilution: (switches.growth_dilution * (3.0 / length) * growth_rate).max(0.0),
            reproduction_loss: switches.reproduction * repro_rate * p.fbv * p.krv,
        }
    }
}

/// Rate of change of scaled damage.
#[must_use]
pub fn damage_rate(kd: f64, concentration: f64, damage: f64, fb: &Feedbacks) -> f64 {
    kd * (fb.uptake * concentration - fb.elimination * damage)
        - (fb.growth_dilution + fb.reproduction_loss) * damage
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::testing::daphnia;

    #[test]
    fn weibull_background_hazard() {
        assert_eq!(background_hazard(0.01, 1.0, 5.0), 0.01);
        assert_eq!(background_hazard(0.0, 0.5, 0.0), 0.0);
        assert_relative_eq!(
            background_hazard(0.02, 2.0, 3.0),
            2.0 * 0.02_f64.powi(2) * 3.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn weibull_hazard_below_unit_shape_is_finite_at_start() {
        assert_eq!(background_hazard(0.01, 0.5, 0.0), HAZARD_CAP);
        assert_eq!(background_hazard(0.01, 0.5, -1.0), HAZARD_CAP);
        assert_eq!(background_hazard(0.01, 2.0, -1.0), 0.0);
        assert_relative_eq!(
            background_hazard(0.01, 0.5, 4.0),
            0.5 * 0.1 * 0.5,
            epsilon = 1e-15
        );
    }

    #[test]
    fn feeding_limits() {
        assert_eq!(feeding(0.8, 2.0, 0.0, 0.0), 0.8);
        assert_relative_eq!(feeding(1.0, 2.0, 2.0, 0.0), 0.5);
        assert_relative_eq!(feeding(1.0, 1.0, 0.0, 4.0), 0.25);
        assert_eq!(feeding(1.0, 8.0, 0.0, 4.0), 1.0);
    }

    #[test]
    fn hazard_is_capped() {
        assert_eq!(hazard(0.5, 1.0, 10.0), 0.0);
        assert_relative_eq!(hazard(3.0, 1.0, 10.0), 20.0);
        assert_eq!(hazard(1e12, 1.0, 10.0), HAZARD_CAP);
        assert_eq!(hazard(f64::MAX, 0.0, 1e300), HAZARD_CAP);
    }

    #[test]
    fn assimilation_stress_saturates() {
        let moa = ModeOfAction::from([1.0, 0.5, 0.0, 0.0, 0.0]);
        let s = Stress::new(4.0, &moa);

        assert_eq!(s.assimilation, 1.0);
        assert_eq!(s.maintenance, 2.0);
        assert_eq!(s.growth, 0.0);
    }

    #[test]
    fn unstarved_growth_is_von_bertalanffy() {
        let p = daphnia();
        let none = Stress::new(0.0, &ModeOfAction::default());

        let g = growth(&p, 1.0, 5.0, &none);
        assert_relative_eq!(g.rate, p.rb * (p.lm - 5.0));
        assert_eq!(g.f_repro, 1.0);
    }

    #[test]
    fn first_stage_starvation_stops_growth() {
        // Length above f * Lm but kappa-share still covers maintenance.
        let p = daphnia();
        let none = Stress::new(0.0, &ModeOfAction::default());

        let g = growth(&p, 0.9, 19.0, &none);
        assert_eq!(g.rate, 0.0);
        assert_relative_eq!(g.f_repro, (0.9 - 0.8 * 19.0 / 20.0) / 0.2, epsilon = 1e-12);
    }

    #[test]
    fn second_stage_starvation_shrinks() {
        let p = daphnia();
        let none = Stress::new(0.0, &ModeOfAction::default());

        let g = growth(&p, 0.5, 19.0, &none);
        let expected = (p.rb / p.yp) * (0.5 * p.lm / p.kap - 19.0);
        assert_relative_eq!(g.rate, expected, epsilon = 1e-12);
        assert!(g.rate < 0.0);
        assert_eq!(g.f_repro, 0.0);

        // Shrinking is slower than the unstarved formula would give.
        let unstarved = p.rb * (0.5 * p.lm - 19.0);
        assert!(g.rate > unstarved);
    }

    #[test]
    fn reproduction_needs_puberty() {
        let p = daphnia();
        let none = Stress::new(0.0, &ModeOfAction::default());

        assert_eq!(reproduction(&p, 1.0, 4.99, &none), 0.0);

        let expected = p.rm * (20.0 * 100.0 - 125.0) / (8000.0 - 125.0);
        assert_relative_eq!(reproduction(&p, 1.0, 10.0, &none), expected, epsilon = 1e-12);
    }

    #[test]
    fn reproduction_is_never_negative() {
        let p = daphnia();
        let none = Stress::new(0.0, &ModeOfAction::default());
        assert_eq!(reproduction(&p, 0.0, 6.0, &none), 0.0);
    }

    #[test]
    fn disabled_feedbacks_are_neutral() {
        let p = daphnia();
        let fb = Feedbacks::new(&FeedbackSwitches::default(), &p, 3.0, 1.0, 2.0);

        assert_eq!(fb.uptake, 1.0);
        assert_eq!(fb.elimination, 1.0);
        assert_eq!(fb.growth_dilution, 0.0);
        assert_eq!(fb.reproduction_loss, 0.0);
        assert_relative_eq!(damage_rate(0.1, 5.0, 2.0, &fb), 0.1 * (5.0 - 2.0), epsilon = 1e-12);
    }

    #[test]
    fn growth_dilution_ignores_shrinking() {
        let p = daphnia();
        let switches = FeedbackSwitches::from([0.0, 0.0, 1.0, 0.0]);

        let growing = Feedbacks::new(&switches, &p, 3.0, 0.3, 0.0);
        assert_relative_eq!(growing.growth_dilution, 0.3);

        let shrinking = Feedbacks::new(&switches, &p, 3.0, -0.3, 0.0);
        assert_eq!(shrinking.growth_dilution, 0.0);
    }
}
