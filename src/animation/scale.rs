use std::cell::Cell;

/// How the two height thresholds are checked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierOrdering {
    /// `> mid` is checked before `> tall`, so the tall tier never applies.
    Literal,
    /// Mutually exclusive tiers, tallest first.
    #[default]
    Ordered,
}

/// Viewport-height tiers for the background shape multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTiers {
    pub base: f64,
    pub mid_threshold: u32,
    pub mid: f64,
    pub tall_threshold: u32,
    pub tall: f64,
    pub ordering: TierOrdering,
}

impl Default for ScaleTiers {
    fn default() -> Self {
        ScaleTiers {
            base: 1.25,
            mid_threshold: 900,
            mid: 1.5,
            tall_threshold: 1000,
            tall: 2.5,
            ordering: TierOrdering::default(),
        }
    }
}

impl ScaleTiers {
    pub fn literal() -> Self {
        ScaleTiers { ordering: TierOrdering::Literal, ..Self::default() }
    }

    pub fn multiplier(&self, viewport_height: u32) -> f64 {
        match self.ordering {
            TierOrdering::Literal => {
                if viewport_height > self.mid_threshold {
                    self.mid
                } else if viewport_height > self.tall_threshold {
                    self.tall
                } else {
                    self.base
                }
            }
            TierOrdering::Ordered => {
                if viewport_height > self.tall_threshold {
                    self.tall
                } else if viewport_height > self.mid_threshold {
                    self.mid
                } else {
                    self.base
                }
            }
        }
    }

    /// `(shape + viewport * multiplier) / viewport + 2`, or `None` when either
    /// height is unknown.
    pub fn scale_factor(&self, shape_height: f64, viewport_height: u32) -> Option<f64> {
        if viewport_height == 0 || !shape_height.is_finite() || shape_height <= 0.0 {
            return None;
        }
        let viewport = f64::from(viewport_height);
        let multiplier = self.multiplier(viewport_height);
        Some((shape_height + viewport * multiplier) / viewport + 2.0)
    }
}

/// Remembers the last scale so it is only recomputed when an input changes.
#[derive(Debug, Default)]
pub struct ScaleMemo {
    tiers: ScaleTiers,
    inputs: Cell<Option<(u64, u32)>>,
    value: Cell<Option<f64>>,
    computations: Cell<u32>,
}

impl ScaleMemo {
    pub fn new(tiers: ScaleTiers) -> Self {
        ScaleMemo { tiers, ..Self::default() }
    }

    pub fn get(&self, shape_height: f64, viewport_height: u32) -> Option<f64> {
        let key = (shape_height.to_bits(), viewport_height);
        if self.inputs.get() == Some(key) {
            return self.value.get();
        }
        let value = self.tiers.scale_factor(shape_height, viewport_height);
        self.computations.set(self.computations.get() + 1);
        self.inputs.set(Some(key));
        self.value.set(value);
        value
    }

    pub fn computations(&self) -> u32 {
        self.computations.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_viewport_uses_base_multiplier() {
        let tiers = ScaleTiers::default();
        assert_eq!(tiers.multiplier(850), 1.25);
        assert_eq!(tiers.multiplier(900), 1.25);

        let scale = tiers.scale_factor(600.0, 850).unwrap();
        assert!((scale - 3.955_882).abs() < 1e-5, "got {scale}");
    }

    #[test]
    fn ordered_tiers_reach_the_tall_multiplier() {
        let tiers = ScaleTiers::default();
        assert_eq!(tiers.multiplier(901), 1.5);
        assert_eq!(tiers.multiplier(1000), 1.5);
        assert_eq!(tiers.multiplier(1001), 2.5);
    }

    #[test]
    fn literal_tiers_never_reach_the_tall_multiplier() {
        let tiers = ScaleTiers::literal();
        assert_eq!(tiers.multiplier(900), 1.25);
        assert_eq!(tiers.multiplier(950), 1.5);
        assert_eq!(tiers.multiplier(1400), 1.5);
    }

    #[test]
    fn unknown_heights_do_not_scale() {
        let tiers = ScaleTiers::default();
        assert_eq!(tiers.scale_factor(600.0, 0), None);
        assert_eq!(tiers.scale_factor(0.0, 850), None);
        assert_eq!(tiers.scale_factor(f64::NAN, 850), None);
    }

    #[test]
    fn memo_recomputes_only_on_changed_inputs() {
        let memo = ScaleMemo::new(ScaleTiers::default());
        let first = memo.get(600.0, 850);
        assert_eq!(memo.get(600.0, 850), first);
        assert_eq!(memo.computations(), 1);

        memo.get(600.0, 1100);
        memo.get(620.0, 1100);
        memo.get(620.0, 1100);
        assert_eq!(memo.computations(), 3);
    }
}
