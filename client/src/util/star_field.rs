//! Deterministic decorative star field for the home page background.
//!
//! Positions come from a fixed-seed generator so the server-rendered markup
//! and the hydrated markup agree.

#[cfg(test)]
#[path = "star_field_test.rs"]
mod star_field_test;

pub const DEFAULT_STAR_COUNT: usize = 150;
pub const DEFAULT_SEED: u64 = 0x5EED_57A2;

/// One star, positioned in percent of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_delay: f64,
}

impl Star {
    /// Inline style for an absolutely positioned star.
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.2}px;height:{:.2}px;opacity:{:.2};animation-delay:{:.2}s",
            self.x, self.y, self.size, self.size, self.opacity, self.twinkle_delay
        )
    }
}

/// Linear congruential generator; constants from Knuth's MMIX.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        // Top 53 bits give an exact f64 in [0, 1).
        #[allow(clippy::cast_precision_loss)]
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        unit
    }
}

/// `count` stars generated from `seed`.
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| Star {
            x: rng.next_unit() * 100.0,
            y: rng.next_unit() * 100.0,
            size: 0.5 + rng.next_unit() * 2.0,
            opacity: 0.3 + rng.next_unit() * 0.7,
            twinkle_delay: rng.next_unit() * 5.0,
        })
        .collect()
}
