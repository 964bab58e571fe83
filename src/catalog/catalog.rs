/// An ordered collection of trick definitions. Order is definition order and
/// is observable: the offered lists presented to both sides preserve it.
#[derive(Debug, Clone)]
pub struct Catalog {
    tricks: Vec<Trick>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed definitions up front so the
    /// engine never has to re-check probability ranges mid-match.
    pub fn new(tricks: Vec<Trick>) -> anyhow::Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for trick in tricks.iter() {
            anyhow::ensure!(trick.base > 0.0, "'{}': base score must be positive", trick.name);
            anyhow::ensure!(
                (0.0..=1.0).contains(&trick.odds),
                "'{}': landing odds outside [0, 1]",
                trick.name
            );
            anyhow::ensure!(
                (0.0..=1.0).contains(&trick.risk),
                "'{}': risk outside [0, 1]",
                trick.name
            );
            anyhow::ensure!(
                (1..=FINAL_ROUND).contains(&trick.unlock),
                "'{}': unlock round outside 1..={}",
                trick.name,
                FINAL_ROUND
            );
            anyhow::ensure!(seen.insert(trick.name.clone()), "duplicate trick '{}'", trick.name);
        }
        anyhow::ensure!(!tricks.is_empty(), "catalog has no tricks");
        // every sheet is a superset of the round-1 sheet, so this guarantees
        // no turn ever offers an empty list to either side
        anyhow::ensure!(
            tricks.iter().any(|t| t.unlock == 1),
            "catalog has no round-1 tricks; the opening turn would have nothing to offer"
        );
        Ok(Self { tricks })
    }

    /// Read a catalog from a JSON array of trick definitions.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open catalog {}", path.display()))?;
        let tricks = serde_json::from_reader::<_, Vec<Trick>>(file)
            .with_context(|| format!("parse catalog {}", path.display()))?;
        Self::new(tricks)
    }

    /// The fixed championship trick table.
    pub fn standard() -> Self {
        Self::new(vec![
            // beginner (round 1)
            Trick::new("Ollie", 20.0, 0.95, 0.00, 1),
            Trick::new("Manual", 15.0, 0.90, 0.05, 1),
            Trick::new("Shuvit", 25.0, 0.85, 0.05, 1),
            Trick::new("Pop Shuvit", 30.0, 0.80, 0.10, 1),
            Trick::new("Frontside 180", 30.0, 0.85, 0.10, 1),
            Trick::new("Backside 180", 30.0, 0.85, 0.10, 1),
            Trick::new("Kickturn", 10.0, 0.95, 0.00, 1),
            Trick::new("Pivot", 15.0, 0.90, 0.05, 1),
            // intermediate (round 2)
            Trick::new("Kickflip", 40.0, 0.75, 0.20, 2),
            Trick::new("Heelflip", 45.0, 0.70, 0.25, 2),
            Trick::new("Varial Kickflip", 50.0, 0.65, 0.30, 2),
            Trick::new("Fakie Ollie", 35.0, 0.80, 0.15, 2),
            Trick::new("Fakie Bigspin", 50.0, 0.60, 0.30, 2),
            Trick::new("Frontside Shuvit", 35.0, 0.80, 0.15, 2),
            Trick::new("Nollie", 40.0, 0.75, 0.20, 2),
            // advanced (round 3)
            Trick::new("Hardflip", 60.0, 0.55, 0.40, 3),
            Trick::new("Tre Flip", 70.0, 0.50, 0.45, 3),
            Trick::new("Inward Heelflip", 70.0, 0.45, 0.50, 3),
            Trick::new("Laser Flip", 80.0, 0.40, 0.55, 3),
            Trick::new("Bigspin", 60.0, 0.50, 0.40, 3),
            Trick::new("Impossible", 65.0, 0.45, 0.50, 3),
            // expert (round 3)
            Trick::new("Double Kickflip", 85.0, 0.35, 0.60, 3),
            Trick::new("Hospital Flip", 75.0, 0.40, 0.50, 3),
            Trick::new("360 Hardflip", 90.0, 0.30, 0.65, 3),
            Trick::new("Gazelle Flip", 95.0, 0.25, 0.70, 3),
            Trick::new("Darkslide", 100.0, 0.20, 0.75, 3),
            Trick::new("Nollie Bigspin Heelflip", 100.0, 0.15, 0.80, 3),
        ])
        .expect("standard catalog is valid")
    }

    pub fn lookup(&self, name: &str) -> Result<&Trick, GameError> {
        self.tricks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| GameError::UnknownTrick(String::from(name)))
    }

    /// The visibility rule. Humans see tricks unlocked by the given round;
    /// opponents additionally see the entire catalog in the final round,
    /// whatever each trick's nominal unlock. Intentional difficulty scaling.
    pub fn available(&self, round: Round, role: Role) -> Vec<&Trick> {
        self.tricks
            .iter()
            .filter(|t| match role {
                Role::Human => t.unlock <= round,
                Role::Opponent => round == FINAL_ROUND || t.unlock <= round,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Trick> {
        self.tricks.iter()
    }
}

use super::{Role, Trick};
use crate::error::GameError;
use crate::{FINAL_ROUND, Round};
use anyhow::Context;
