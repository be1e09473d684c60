/// Reduced Lennard-Jones 12-6 potential term at non-dimensional radius
/// `r* = r/sigma`.
///
/// This is the bracketed term of `u(r) = 4ε(r*⁻¹² − r*⁻⁶)`; the well depth
/// and the factor of four are applied by the integrator.
#[inline]
pub fn reduced_lennard_jones(r_star: f64) -> f64 {
    r_star.powf(-12.0) - r_star.powf(-6.0)
}

/// Reduced Stockmayer potential term: Lennard-Jones plus an angle-averaged
/// permanent-dipole attraction `−δ·r*⁻³`.
///
/// With `delta = 0` this reduces exactly to [`reduced_lennard_jones`].
#[inline]
pub fn reduced_stockmayer(r_star: f64, delta: f64) -> f64 {
    r_star.powf(-12.0) - r_star.powf(-6.0) - delta * r_star.powf(-3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn lennard_jones_vanishes_at_collision_diameter() {
        assert!(f64_approx_equal(reduced_lennard_jones(1.0), 0.0));
    }

    #[test]
    fn lennard_jones_minimum_is_quarter_well_depth_at_rmin() {
        // u*(2^(1/6)) = -1/4, so 4ε·u* reaches -ε there.
        let r_min = 2f64.powf(1.0 / 6.0);
        assert!(f64_approx_equal(reduced_lennard_jones(r_min), -0.25));
    }

    #[test]
    fn lennard_jones_is_strongly_repulsive_at_short_range() {
        assert!(reduced_lennard_jones(0.5) > 1e3);
    }

    #[test]
    fn stockmayer_with_zero_delta_matches_lennard_jones() {
        for r_star in [0.8, 1.0, 1.5, 3.0, 10.0] {
            assert!(f64_approx_equal(
                reduced_stockmayer(r_star, 0.0),
                reduced_lennard_jones(r_star)
            ));
        }
    }

    #[test]
    fn dipole_term_deepens_the_attraction() {
        for r_star in [1.0, 1.5, 3.0] {
            assert!(reduced_stockmayer(r_star, 0.5) < reduced_lennard_jones(r_star));
        }
    }
}
