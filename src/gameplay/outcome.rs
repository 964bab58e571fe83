/// Largest style bonus rolled on a landed trick (20% over base).
pub const MAX_BONUS: f32 = 0.2;

/// What one trick attempt produced. Ephemeral: applied to a skater and
/// handed to the presentation layer, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub landed: bool,
    pub delta: Score,
    pub damage: Health,
}

impl Outcome {
    /// Resolve one attempt. Pure function of the trick and the random source.
    ///
    /// The landing check is inclusive at the odds boundary; the injury check
    /// is strict at the risk boundary. The asymmetry is deliberate and load
    /// bearing for the tuned trick table.
    pub fn resolve(trick: &Trick, rng: &mut impl Rng) -> Self {
        let roll: Probability = rng.random();
        if roll <= trick.odds {
            let bonus: f32 = rng.random_range(0.0..MAX_BONUS);
            Self {
                landed: true,
                delta: tenths(trick.base * (1.0 + bonus)),
                damage: 0,
            }
        } else {
            let delta = tenths(-trick.base * trick.risk);
            let spill: Probability = rng.random();
            Self {
                landed: false,
                delta,
                damage: if spill < trick.risk { 1 } else { 0 },
            }
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let delta = format!("{:+.1}", self.delta);
        match (self.landed, self.damage) {
            (true, _) => write!(f, "{} {}", "LANDED".green(), delta.green()),
            (false, 0) => write!(f, "{} {}", "BAILED".yellow(), delta.yellow()),
            (false, _) => write!(f, "{} {} {}", "BAILED".red(), delta.red(), "INJURED".red()),
        }
    }
}

/// Round to one decimal place, the scoreboard's resolution.
fn tenths(score: Score) -> Score {
    (score * 10.0).round() / 10.0
}

use crate::catalog::Trick;
use crate::{Health, Probability, Score};
use colored::Colorize;
use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    /// Replays a fixed sequence of u32 draws. The standard f32 distribution
    /// keeps the top 24 bits, so a draw of `p * 2^24 << 8` yields exactly p.
    struct Script(Vec<u32>, usize);

    impl Script {
        fn new(rolls: Vec<u32>) -> Self {
            Self(rolls, 0)
        }
        fn exactly(p: f32) -> u32 {
            ((p * (1 << 24) as f32) as u32) << 8
        }
    }

    impl RngCore for Script {
        fn next_u32(&mut self) -> u32 {
            let roll = self.0[self.1 % self.0.len()];
            self.1 += 1;
            roll
        }
        fn next_u64(&mut self) -> u64 {
            ((self.next_u32() as u64) << 32) | self.next_u32() as u64
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn sure_trick_always_lands() {
        let trick = Trick::new("Ollie", 20.0, 1.0, 0.0, 1);
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let outcome = Outcome::resolve(&trick, rng);
            assert!(outcome.landed);
            assert!(outcome.delta >= 20.0);
            assert!(outcome.delta <= 24.0);
            assert_eq!(outcome.damage, 0);
        }
    }

    #[test]
    fn doomed_trick_always_bails_and_hurts() {
        let trick = Trick::new("Darkslide", 100.0, 0.0, 1.0, 3);
        let ref mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let outcome = Outcome::resolve(&trick, rng);
            assert!(!outcome.landed);
            assert_eq!(outcome.delta, -100.0);
            assert_eq!(outcome.damage, 1);
        }
    }

    #[test]
    fn landing_boundary_is_inclusive() {
        let trick = Trick::new("Kickflip", 40.0, 0.5, 0.2, 2);
        // first draw hits the odds exactly; second draw is the style bonus
        let ref mut rng = Script::new(vec![Script::exactly(0.5), 0]);
        let outcome = Outcome::resolve(&trick, rng);
        assert!(outcome.landed);
        assert_eq!(outcome.delta, 40.0);
    }

    #[test]
    fn injury_boundary_is_strict() {
        let trick = Trick::new("Kickflip", 40.0, 0.0, 0.5, 2);
        // first draw forces the bail; second draw hits the risk exactly
        let ref mut rng = Script::new(vec![u32::MAX, Script::exactly(0.5)]);
        let outcome = Outcome::resolve(&trick, rng);
        assert!(!outcome.landed);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.delta, -20.0);
    }

    #[test]
    fn deltas_have_scoreboard_resolution() {
        let trick = Trick::new("Shuvit", 25.0, 0.85, 0.05, 1);
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let outcome = Outcome::resolve(&trick, rng);
            let scaled = outcome.delta * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-3);
        }
    }
}
