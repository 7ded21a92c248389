use crate::error::{AcoError, AcoResult};

/// Tunable constants of the colony.
#[derive(Clone, Debug, PartialEq)]
pub struct AcoParams {
    /// pheromone exponent
    pub alpha: u32,
    /// inverse distance exponent
    pub beta: u32,
    /// evaporation rate, 0 < rho < 1
    pub rho: f64,
    /// reinforcement scale, q > 0
    pub q: f64,
    pub num_ants: usize,
    pub max_time: usize,
    pub initial_pheromone: f64,
    pub taueta_min: f64,
    pub taueta_max: f64,
    pub phero_min: f64,
    pub phero_max: f64,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            alpha: 4,
            beta: 3,
            rho: 0.01,
            q: 2.0,
            num_ants: 10,
            max_time: 10_000,
            initial_pheromone: 0.01,
            taueta_min: 0.0001,
            taueta_max: f64::MAX / 2000.0,
            phero_min: 0.0001,
            phero_max: 100_000.01,
        }
    }
}

impl AcoParams {
    pub fn validate(&self) -> AcoResult<()> {
        check_exponent("alpha", self.alpha)?;
        check_exponent("beta", self.beta)?;
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(AcoError::invalid("rho", format!("{} is not in (0, 1)", self.rho)));
        }
        if !(self.q > 0.0 && self.q.is_finite()) {
            return Err(AcoError::invalid("q", format!("{} is not positive", self.q)));
        }
        if self.num_ants == 0 {
            return Err(AcoError::invalid("num_ants", "at least one ant is required"));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(AcoError::invalid(
                "initial_pheromone",
                format!("{} is not positive", self.initial_pheromone),
            ));
        }
        check_bounds("taueta", self.taueta_min, self.taueta_max)?;
        check_bounds("phero", self.phero_min, self.phero_max)?;
        Ok(())
    }

    /// `alpha` as a `powi` exponent, saturating on unvalidated values.
    pub fn alpha_exponent(&self) -> i32 {
        i32::try_from(self.alpha).unwrap_or(i32::MAX)
    }

    pub fn beta_exponent(&self) -> i32 {
        i32::try_from(self.beta).unwrap_or(i32::MAX)
    }

    pub fn clamp_taueta(&self, value: f64) -> f64 {
        value.clamp(self.taueta_min, self.taueta_max)
    }

    pub fn clamp_pheromone(&self, value: f64) -> f64 {
        value.clamp(self.phero_min, self.phero_max)
    }
}

fn check_exponent(name: &'static str, value: u32) -> AcoResult<()> {
    if i32::try_from(value).is_err() {
        return Err(AcoError::invalid(
            name,
            format!("exponent {} exceeds {}", value, i32::MAX),
        ));
    }
    Ok(())
}

fn check_bounds(name: &'static str, min: f64, max: f64) -> AcoResult<()> {
    if !(min >= 0.0 && min.is_finite()) {
        return Err(AcoError::invalid(name, format!("lower bound {} is not a finite value >= 0", min)));
    }
    if !(max >= min && max.is_finite()) {
        return Err(AcoError::invalid(
            name,
            format!("upper bound {} is below lower bound {}", max, min),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let params = AcoParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.alpha, 4);
        assert_eq!(params.beta, 3);
        assert_relative_eq!(params.rho, 0.01);
    }

    #[test]
    fn test_rho_must_be_open_unit_interval() {
        for rho in [0.0, 1.0, -0.5, f64::NAN] {
            let params = AcoParams {
                rho,
                ..AcoParams::default()
            };
            assert!(matches!(
                params.validate(),
                Err(AcoError::InvalidParameter { name: "rho", .. })
            ));
        }
    }

    #[test]
    fn test_zero_ants_rejected() {
        let params = AcoParams {
            num_ants: 0,
            ..AcoParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AcoError::InvalidParameter { name: "num_ants", .. })
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let params = AcoParams {
            phero_min: 2.0,
            phero_max: 1.0,
            ..AcoParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AcoError::InvalidParameter { name: "phero", .. })
        ));
    }

    #[test]
    fn test_oversized_exponents_rejected() {
        let params = AcoParams {
            alpha: u32::MAX,
            ..AcoParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AcoError::InvalidParameter { name: "alpha", .. })
        ));
        assert_eq!(params.alpha_exponent(), i32::MAX);

        let params = AcoParams {
            beta: i32::MAX as u32 + 1,
            ..AcoParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AcoError::InvalidParameter { name: "beta", .. })
        ));

        let params = AcoParams {
            alpha: i32::MAX as u32,
            ..AcoParams::default()
        };
        assert!(params.validate().is_ok());
        assert_eq!(params.alpha_exponent(), i32::MAX);
    }

    #[test]
    fn test_clamps() {
        let params = AcoParams::default();
        assert_relative_eq!(params.clamp_pheromone(0.0), 0.0001);
        assert_relative_eq!(params.clamp_pheromone(1e9), 100_000.01);
        assert_relative_eq!(params.clamp_taueta(0.5), 0.5);
        assert_relative_eq!(params.clamp_taueta(f64::INFINITY), f64::MAX / 2000.0);
    }
}
