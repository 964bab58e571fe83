pub mod human;
pub use human::*;

pub mod robot;
pub use robot::*;

/// Move-selection boundary. Given the sheet offered for the current turn's
/// tier, return an index into it. Implementations must return a valid index;
/// invalid human input is re-prompted inside the boundary and never escapes.
pub trait Player: std::fmt::Debug {
    fn pick(&self, skater: &Competitor, offered: &[&Trick], rng: &mut SmallRng) -> usize;
}

use crate::catalog::Trick;
use crate::gameplay::Competitor;
use rand::rngs::SmallRng;
