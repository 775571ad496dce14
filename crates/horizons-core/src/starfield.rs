//! Decorative starfield behind the content pages.
//!
//! Stars are scattered through a spherical shell around the camera from a
//! fixed seed, so every launch draws the same sky. The shell turns slowly;
//! callers advance the clock per frame and simply stop advancing it to freeze.

use std::f32::consts::{PI, TAU};
use std::time::{Duration, Instant};

pub const STAR_COUNT: usize = 1_500;
pub const STAR_SEED: u64 = 0x5EED_57A2;

const MIN_RADIUS: f32 = 10.0;
const RADIUS_SPREAD: f32 = 50.0;
/// Radians per second around the x and y axes.
const SPIN_X: f32 = 0.01;
const SPIN_Y: f32 = 0.015;
const FIELD_OF_VIEW: f32 = 75.0 * PI / 180.0;
const STAR_SIZE: f32 = 0.08;
/// Frame gaps longer than this are treated as a pause, not elapsed time.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Screen-space star for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: [f32; 3],
}

pub fn generate_stars(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let radius = MIN_RADIUS + rng.f32() * RADIUS_SPREAD;
            let theta = rng.f32() * TAU;
            let phi = (rng.f32() * 2.0 - 1.0).acos();
            let position = [
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ];
            Star {
                position,
                color: star_color(&mut rng),
            }
        })
        .collect()
}

// Mostly blue-white and white, with a few violet and golden stars.
fn star_color(rng: &mut fastrand::Rng) -> [f32; 3] {
    let choice = rng.f32();
    if choice < 0.4 {
        [0.8 + rng.f32() * 0.2, 0.9 + rng.f32() * 0.1, 1.0]
    } else if choice < 0.7 {
        [1.0, 1.0, 1.0]
    } else if choice < 0.85 {
        [0.9 + rng.f32() * 0.1, 0.7 + rng.f32() * 0.2, 1.0]
    } else {
        [1.0, 0.9 + rng.f32() * 0.1, 0.6 + rng.f32() * 0.2]
    }
}

/// Rotation about the x and y axes after `elapsed` of spinning.
pub fn rotation_at(elapsed: Duration) -> (f32, f32) {
    let secs = elapsed.as_secs_f32();
    (secs * SPIN_X, secs * SPIN_Y)
}

/// Perspective projection from a camera at the origin looking down -z.
/// Returns `None` for stars behind the camera or outside the viewport.
pub fn project(star: &Star, rotation: (f32, f32), width: f32, height: f32) -> Option<ProjectedStar> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let [x, y, z] = star.position;
    let (sin_x, cos_x) = rotation.0.sin_cos();
    let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
    let (sin_y, cos_y) = rotation.1.sin_cos();
    let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);

    let depth = -z;
    if depth <= 0.1 {
        return None;
    }
    let focal = (height / 2.0) / (FIELD_OF_VIEW / 2.0).tan();
    let screen_x = width / 2.0 + x * focal / depth;
    let screen_y = height / 2.0 - y * focal / depth;
    if !(0.0..=width).contains(&screen_x) || !(0.0..=height).contains(&screen_y) {
        return None;
    }
    Some(ProjectedStar {
        x: screen_x,
        y: screen_y,
        radius: (STAR_SIZE * focal / depth / 2.0).clamp(0.4, 2.0),
        color: star.color,
    })
}

/// Stars plus the spin clock.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    elapsed: Duration,
    last_tick: Option<Instant>,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(STAR_COUNT, STAR_SEED)
    }
}

impl Starfield {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            stars: generate_stars(count, seed),
            elapsed: Duration::ZERO,
            last_tick: None,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn rotation(&self) -> (f32, f32) {
        rotation_at(self.elapsed)
    }

    /// Advance the spin to `now`. The first tick after a pause only re-arms the clock.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_tick {
            self.elapsed += now.saturating_duration_since(last).min(MAX_FRAME_STEP);
        }
        self.last_tick = Some(now);
    }

    pub fn pause(&mut self) {
        self.last_tick = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_draws_the_same_sky() {
        assert_eq!(generate_stars(64, 7), generate_stars(64, 7));
        assert_ne!(generate_stars(64, 7), generate_stars(64, 8));
    }

    #[test]
    fn stars_lie_in_the_shell_with_valid_colors() {
        for star in generate_stars(500, STAR_SEED) {
            let [x, y, z] = star.position;
            let radius = (x * x + y * y + z * z).sqrt();
            assert!((MIN_RADIUS - 1e-3..=MIN_RADIUS + RADIUS_SPREAD + 1e-3).contains(&radius));
            assert!(star.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn projection_centers_stars_straight_ahead() {
        let ahead = Star {
            position: [0.0, 0.0, -20.0],
            color: [1.0, 1.0, 1.0],
        };
        let projected = project(&ahead, (0.0, 0.0), 800.0, 600.0).expect("visible");
        assert!((projected.x - 400.0).abs() < 1e-3);
        assert!((projected.y - 300.0).abs() < 1e-3);

        let behind = Star {
            position: [0.0, 0.0, 20.0],
            ..ahead
        };
        assert_eq!(project(&behind, (0.0, 0.0), 800.0, 600.0), None);
    }

    #[test]
    fn clock_only_advances_between_ticks() {
        let mut field = Starfield::new(4, 1);
        let start = Instant::now();
        field.tick(start);
        assert_eq!(field.elapsed(), Duration::ZERO);
        field.tick(start + Duration::from_millis(16));
        assert_eq!(field.elapsed(), Duration::from_millis(16));

        field.pause();
        field.tick(start + Duration::from_secs(60));
        assert_eq!(field.elapsed(), Duration::from_millis(16));
        field.tick(start + Duration::from_secs(70));
        assert_eq!(field.elapsed(), Duration::from_millis(116));
    }
}
