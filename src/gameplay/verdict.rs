/// Why a match ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruling {
    /// Higher score after all turns.
    Outscored,
    /// Scores tied; more health left.
    Healthier,
    /// Dead tie on score and health. The judges side with the opponent —
    /// the house wins the dead tie, by rule.
    Judges,
    /// The other side was incapacitated mid-match.
    Injury,
}

/// Terminal result of one match.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub winner: String,
    pub human_won: bool,
    pub ruling: Ruling,
}

impl Verdict {
    pub fn new(winner: &Competitor, human_won: bool, ruling: Ruling) -> Self {
        Self {
            winner: winner.name.clone(),
            human_won,
            ruling,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let winner = if self.human_won {
            self.winner.green().bold()
        } else {
            self.winner.red().bold()
        };
        match self.ruling {
            Ruling::Outscored => write!(f, "{} wins the round on points", winner),
            Ruling::Healthier => write!(f, "scores tied, but {} had better form", winner),
            Ruling::Judges => write!(f, "dead tie; the judges favor {}", winner),
            Ruling::Injury => write!(f, "{} wins by injury stoppage", winner),
        }
    }
}

use crate::gameplay::Competitor;
use colored::Colorize;
