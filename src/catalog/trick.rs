#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Points awarded for a clean landing, before the style bonus.
    pub base: Score,
    /// Chance the trick lands.
    pub odds: Probability,
    /// Chance of injury on a bail, and the scale of the bail penalty.
    pub risk: Probability,
    /// Round in which the trick becomes available to the human skater.
    pub unlock: Round,
}

impl Trick {
    pub fn new(name: &str, base: Score, odds: Probability, risk: Probability, unlock: Round) -> Self {
        Self {
            name: String::from(name),
            base,
            odds,
            risk,
            unlock,
        }
    }

    /// Difficulty bracket implied by the unlock round. Round 3 spans both
    /// the advanced and expert tables; the definition carries no field that
    /// separates them.
    pub fn tier(&self) -> &'static str {
        match self.unlock {
            1 => "beginner",
            2 => "intermediate",
            _ => "advanced",
        }
    }
}

impl std::fmt::Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // pad before coloring so the escape codes don't count toward the width
        let name = format!("{:<24}", self.name);
        let name = match self.unlock {
            1 => name.green(),
            2 => name.yellow(),
            _ => name.red(),
        };
        write!(
            f,
            "{} {:>5.0} pts  {:>3.0}% land  {:>3.0}% risk  {}",
            name,
            self.base,
            self.odds * 100.0,
            self.risk * 100.0,
            self.tier().dimmed(),
        )
    }
}

use crate::{Probability, Round, Score};
use colored::Colorize;
use serde::{Deserialize, Serialize};
