/// Computer skater: a uniform draw over the offered sheet.
pub struct Robot;

impl Player for Robot {
    fn pick(&self, _: &Competitor, offered: &[&Trick], rng: &mut SmallRng) -> usize {
        rng.random_range(0..offered.len())
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

use crate::catalog::Trick;
use crate::gameplay::Competitor;
use crate::players::Player;
use rand::Rng;
use rand::rngs::SmallRng;
use std::fmt::{Debug, Formatter};
