use rand::Rng;
use std::f32::consts::PI;

use crate::physic_engine::types::Point;

/// Point de la courbe en cœur pour le paramètre `t` (période 2π).
///
/// ```text
/// x(t) = 160 · sin(t)³
/// y(t) = 130·cos(t) − 50·cos(2t) − 20·cos(3t) − 10·cos(4t) + 25
/// ```
///
/// Repère mathématique : `y` vers le haut.
#[inline]
pub fn point_on_heart(t: f32) -> Point {
    Point::new(
        160.0 * t.sin().powi(3),
        130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos() - 10.0 * (4.0 * t).cos()
            + 25.0,
    )
}

/// Tire `t` uniformément dans ]−π, π] et renvoie le point correspondant.
///
/// Uniforme en `t`, pas en abscisse curviligne : la densité est plus forte
/// près des lobes.
#[inline]
pub fn random_point_on_heart<R: Rng + ?Sized>(rng: &mut R) -> Point {
    let u: f32 = rng.random();
    point_on_heart(PI - 2.0 * PI * u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_point_on_heart_at_zero() {
        let p = point_on_heart(0.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_point_on_heart_bottom_tip() {
        // t = ±π : pointe basse du cœur
        let p = point_on_heart(PI);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - (-145.0)).abs() < 1e-3);
    }

    #[test]
    fn test_curve_is_symmetric() {
        for i in 1..20 {
            let t = i as f32 * 0.15;
            let a = point_on_heart(t);
            let b = point_on_heart(-t);
            assert!((a.x + b.x).abs() < 1e-4);
            assert!((a.y - b.y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_random_points_stay_in_bounds() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = random_point_on_heart(&mut rng);
            assert!(p.x.abs() <= 160.0 + 1e-3);
            assert!(p.y <= 145.0 && p.y >= -145.0 - 1e-3);
            assert!(p.length() >= 75.0 - 1e-2);
        }
    }
}
