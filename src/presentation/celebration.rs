//! Short-lived confetti burst shown for a win.

use rand::Rng;
use std::time::{Duration, Instant};
use tictactoe_board::Marker;

/// Plain RGB colour, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

const BLUES: [Rgb; 3] = [Rgb(0x42, 0x85, 0xf4), Rgb(0x8a, 0xb4, 0xf8), Rgb(0xc6, 0xda, 0xfc)];
const REDS: [Rgb; 3] = [Rgb(0xea, 0x43, 0x35), Rgb(0xf2, 0x8b, 0x82), Rgb(0xfa, 0xd2, 0xcf)];

/// Palette used for `winner`'s confetti.
pub fn palette(winner: Marker) -> &'static [Rgb; 3] {
    match winner {
        Marker::X => &BLUES,
        Marker::O => &REDS,
    }
}

/// One piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the drawing area.
    pub x: f32,
    /// Fill colour.
    pub color: Rgb,
    /// Round or square piece.
    pub round: bool,
    /// Time to fall from the top edge to the bottom.
    pub fall: Duration,
}

/// A particle with its current vertical progress (0 = top, 1 = bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingParticle<'a> {
    /// The particle.
    pub particle: &'a Particle,
    /// Fraction of the fall completed.
    pub progress: f32,
}

/// One burst of particles. Never grows after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    winner: Marker,
    started: Instant,
    particles: Vec<Particle>,
}

impl Celebration {
    /// Pieces per burst.
    pub const PARTICLES: usize = 100;
    /// Everything is gone this long after the burst.
    pub const LIFETIME: Duration = Duration::from_secs(5);

    /// Creates a burst in `winner`'s colours.
    pub fn burst(winner: Marker, now: Instant, rng: &mut impl Rng) -> Self {
        let colors = palette(winner);
        let particles = (0..Self::PARTICLES)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                color: colors[rng.random_range(0..colors.len())],
                round: rng.random_bool(0.5),
                fall: Duration::from_secs_f32(rng.random_range(2.0..5.0)),
            })
            .collect();
        Self {
            winner,
            started: now,
            particles,
        }
    }

    /// Marker being celebrated.
    pub fn winner(&self) -> Marker {
        self.winner
    }

    /// When the burst started.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// All particles, including ones that already landed.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles still falling at `now`.
    pub fn falling(&self, now: Instant) -> impl Iterator<Item = FallingParticle<'_>> {
        let elapsed = now.saturating_duration_since(self.started);
        self.particles.iter().filter_map(move |particle| {
            let progress = elapsed.as_secs_f32() / particle.fall.as_secs_f32();
            (progress < 1.0).then_some(FallingParticle { particle, progress })
        })
    }

    /// True once the burst's time budget is spent.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Self::LIFETIME
    }
}
