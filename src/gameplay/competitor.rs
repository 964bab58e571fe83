/// Mutable state of one skater, human or computer, for the life of a
/// tournament (human) or a single round (opponent).
#[derive(Debug, Clone)]
pub struct Competitor {
    pub name: String,
    pub role: Role,
    pub score: Score,
    pub health: Health,
    pub round: Round,
    pub unlocked: Vec<String>,
}

impl Competitor {
    fn new(name: &str, role: Role, round: Round, catalog: &Catalog) -> Self {
        let mut skater = Self {
            name: String::from(name),
            role,
            score: 0.0,
            health: MAX_HEALTH,
            round,
            unlocked: Vec::new(),
        };
        skater.relearn(catalog);
        skater
    }

    /// The human skater, entering the Qualifier.
    pub fn entrant(name: &str, catalog: &Catalog) -> Self {
        Self::new(name, Role::Human, 1, catalog)
    }

    /// A freshly generated opponent for the given round.
    pub fn challenger(name: &str, round: Round, catalog: &Catalog) -> Self {
        Self::new(name, Role::Opponent, round, catalog)
    }

    /// Attempt a trick and apply its outcome to this skater's own fields.
    ///
    /// Legality is a selection-time concern: the bout always passes
    /// `restrict = false`, because the offered sheet it builds is already
    /// filtered by tier. `restrict = true` is for callers driving a skater
    /// directly by trick name.
    pub fn attempt(
        &mut self,
        trick: &Trick,
        restrict: bool,
        rng: &mut impl Rng,
    ) -> Result<Outcome, GameError> {
        if self.health == 0 {
            return Err(GameError::NotCompeting(self.name.clone()));
        }
        if restrict && !self.unlocked.iter().any(|n| n == &trick.name) {
            return Err(GameError::TrickLocked(trick.name.clone()));
        }
        let outcome = Outcome::resolve(trick, rng);
        self.score += outcome.delta;
        if outcome.damage > 0 {
            self.hurt(outcome.damage);
        }
        log::debug!(
            "[attempt] {} {} {} -> {:.1} pts, {} health",
            self.name,
            trick.name,
            if outcome.landed { "landed" } else { "bailed" },
            self.score,
            self.health,
        );
        Ok(outcome)
    }

    pub fn hurt(&mut self, amount: Health) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: Health) {
        self.health = MAX_HEALTH.min(self.health + amount);
    }

    /// Move up one round and refresh the unlocked set. At the final round
    /// this is a no-op notice: state is untouched.
    pub fn advance(&mut self, catalog: &Catalog) -> Result<Round, GameError> {
        if self.round >= FINAL_ROUND {
            return Err(GameError::RoundLimitReached(self.round));
        }
        self.round += 1;
        self.relearn(catalog);
        Ok(self.round)
    }

    /// Recompute the unlocked set from the catalog's visibility rule.
    pub fn relearn(&mut self, catalog: &Catalog) {
        self.unlocked = catalog
            .available(self.round, self.role)
            .iter()
            .map(|t| t.name.clone())
            .collect();
    }

    /// Fresh health for a new match. Score survives unless asked otherwise.
    pub fn reset(&mut self, reset_score: bool) {
        self.health = MAX_HEALTH;
        if reset_score {
            self.score = 0.0;
        }
    }

    /// Incapacitated: zero health ends the match immediately.
    pub fn out(&self) -> bool {
        self.health == 0
    }
}

impl std::fmt::Display for Competitor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} (Round {})", self.name.bold(), self.round)?;
        writeln!(f, "  Score  {:.1}", self.score)?;
        write!(
            f,
            "  Health {} ({}/{}, {})",
            view::hearts(self.health),
            self.health,
            MAX_HEALTH,
            view::form(self.health),
        )
    }
}

use crate::catalog::{Catalog, Role, Trick};
use crate::error::GameError;
use crate::gameplay::Outcome;
use crate::view;
use crate::{FINAL_ROUND, Health, MAX_HEALTH, Round, Score};
use colored::Colorize;
use rand::Rng;
