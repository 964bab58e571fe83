/// Opponent name pools, one per round.
const POOLS: [[&str; 3]; 3] = [
    ["Ryan", "Chloe", "Sam"],
    ["Tom Penny", "Rob Dyrdek", "Sean"],
    ["Nyjah Huston", "Tony Hawk", "Andrew Reynolds"],
];

/// Pause before each rival attempt during live play.
const TEMPO: Duration = Duration::from_millis(900);

/// Sequences the three rounds: advance the human, generate a fresh rival,
/// run one bout, stop at the first loss. Owns the run's only RNG so a seed
/// reproduces the entire tournament.
pub struct Tournament<'a> {
    catalog: &'a Catalog,
    rng: SmallRng,
    tempo: Duration,
}

impl<'a> Tournament<'a> {
    pub fn new(catalog: &'a Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            catalog,
            rng,
            tempo: TEMPO,
        }
    }

    pub fn tempo(mut self, tempo: Duration) -> Self {
        self.tempo = tempo;
        self
    }

    /// Play until eliminated or crowned. Returns whether the human took the
    /// championship. The human's score accumulates across all three rounds;
    /// only health resets between matches.
    pub fn run(&mut self, name: &str, player: &dyn Player, ai: &dyn Player) -> bool {
        let mut human = Competitor::entrant(name, self.catalog);
        for round in 1..=FINAL_ROUND {
            if round > human.round {
                if let Err(notice) = human.advance(self.catalog) {
                    log::info!("{}", notice);
                }
            }
            view::round(round);
            let mut rival = self.challenger(round);
            log::info!("[round {}] {} vs {}", round, human.name, rival.name);
            let bout = Bout::paced(self.catalog, self.tempo);
            let verdict = bout.run(&mut human, &mut rival, player, ai, &mut self.rng);
            view::verdict(&verdict);
            log::info!(
                "[round {}] {} ({:?}); {} at {:.1} pts",
                round,
                verdict.winner,
                verdict.ruling,
                human.name,
                human.score,
            );
            if !verdict.human_won {
                return false;
            }
        }
        true
    }

    /// A fresh rival for the round, named from that round's pool. No state
    /// carries over between rounds.
    fn challenger(&mut self, round: Round) -> Competitor {
        let pool = POOLS[(round - 1) as usize];
        let name = *pool.choose(&mut self.rng).expect("pool is non-empty");
        Competitor::challenger(name, round, self.catalog)
    }
}

use crate::catalog::Catalog;
use crate::gameplay::{Bout, Competitor};
use crate::players::Player;
use crate::view;
use crate::{FINAL_ROUND, Round};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::time::Duration;
