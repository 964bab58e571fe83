/// One match: a fixed three turns between the human skater and one rival,
/// with tier escalation per turn and immediate stoppage on injury.
pub struct Bout<'a> {
    catalog: &'a Catalog,
    tempo: Duration,
}

impl<'a> Bout<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            tempo: Duration::ZERO,
        }
    }

    /// Pause before each rival attempt. Presentation pacing only.
    pub fn paced(catalog: &'a Catalog, tempo: Duration) -> Self {
        Self { catalog, tempo }
    }

    /// Play the match to a verdict. Health resets on both sides before turn
    /// one; the human's score carries over from earlier rounds, the rival
    /// starts from a clean slate.
    pub fn run(
        &self,
        human: &mut Competitor,
        rival: &mut Competitor,
        player: &dyn Player,
        ai: &dyn Player,
        rng: &mut SmallRng,
    ) -> Verdict {
        human.reset(false);
        rival.reset(true);
        view::versus(human, rival);
        for turn in 1..=MAX_TURNS {
            // the tier offered escalates with the turn, not with the round
            let tier = turn as Round;
            view::turn(turn);
            if let Some(verdict) = self.turn(tier, human, rival, player, ai, rng) {
                return verdict;
            }
        }
        self.judge(human, rival)
    }

    /// One full turn cycle. `Some` means the match ended early by injury.
    fn turn(
        &self,
        tier: Round,
        human: &mut Competitor,
        rival: &mut Competitor,
        player: &dyn Player,
        ai: &dyn Player,
        rng: &mut SmallRng,
    ) -> Option<Verdict> {
        // human side
        let offered = self.catalog.available(tier, Role::Human);
        let trick = offered[player.pick(human, &offered, rng)];
        let outcome = human
            .attempt(trick, false, rng)
            .expect("early exits keep both sides competing");
        view::attempt(human, trick, &outcome);
        if human.out() {
            view::stoppage(human);
            return Some(Verdict::new(rival, false, Ruling::Injury));
        }
        // rival side; never reached when the human goes down this turn
        let offered = self.catalog.available(tier, Role::Opponent);
        view::thinking(rival);
        std::thread::sleep(self.tempo);
        let trick = offered[ai.pick(rival, &offered, rng)];
        let outcome = rival
            .attempt(trick, false, rng)
            .expect("early exits keep both sides competing");
        view::attempt(rival, trick, &outcome);
        if rival.out() {
            view::stoppage(rival);
            return Some(Verdict::new(human, true, Ruling::Injury));
        }
        None
    }

    /// Scoreboard comparison once all turns complete: points, then health,
    /// then the house rule that a dead tie goes to the rival.
    fn judge(&self, human: &Competitor, rival: &Competitor) -> Verdict {
        view::scoreboard(human, rival);
        if human.score > rival.score {
            Verdict::new(human, true, Ruling::Outscored)
        } else if rival.score > human.score {
            Verdict::new(rival, false, Ruling::Outscored)
        } else if human.health > rival.health {
            Verdict::new(human, true, Ruling::Healthier)
        } else if rival.health > human.health {
            Verdict::new(rival, false, Ruling::Healthier)
        } else {
            Verdict::new(rival, false, Ruling::Judges)
        }
    }
}

use crate::catalog::{Catalog, Role};
use crate::gameplay::{Competitor, Ruling, Verdict};
use crate::players::Player;
use crate::view;
use crate::{MAX_TURNS, Round};
use rand::rngs::SmallRng;
use std::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Trick;
    use crate::players::Robot;
    use rand::SeedableRng;

    /// Always picks the same position in the offered sheet.
    #[derive(Debug)]
    struct Fixed(usize);

    impl Player for Fixed {
        fn pick(&self, _: &Competitor, _: &[&Trick], _: &mut SmallRng) -> usize {
            self.0
        }
    }

    /// Safe always lands, Wild always bails and injures, Sketchy always
    /// bails but never hurts anyone.
    fn lab() -> Catalog {
        Catalog::new(vec![
            Trick::new("Safe", 20.0, 1.0, 0.0, 1),
            Trick::new("Wild", 30.0, 0.0, 1.0, 1),
            Trick::new("Sketchy", 30.0, 0.0, 0.0, 1),
        ])
        .expect("lab catalog")
    }

    fn pair(catalog: &Catalog) -> (Competitor, Competitor) {
        (
            Competitor::entrant("Daewon", catalog),
            Competitor::challenger("Sam", 1, catalog),
        )
    }

    #[test]
    fn dead_tie_goes_to_the_house() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        human.score = 60.0;
        rival.score = 60.0;
        let verdict = Bout::new(&catalog).judge(&human, &rival);
        assert_eq!(verdict.winner, "Sam");
        assert!(!verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Judges);
    }

    #[test]
    fn points_decide_before_health() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        human.score = 61.0;
        rival.score = 60.0;
        rival.health = 3;
        human.health = 1;
        let verdict = Bout::new(&catalog).judge(&human, &rival);
        assert!(verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Outscored);
    }

    #[test]
    fn health_breaks_score_ties() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        human.score = 60.0;
        rival.score = 60.0;
        human.health = 2;
        rival.health = 1;
        let verdict = Bout::new(&catalog).judge(&human, &rival);
        assert!(verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Healthier);
    }

    #[test]
    fn rival_injury_ends_the_match_mid_turn() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        rival.health = 1;
        let ref mut rng = SmallRng::seed_from_u64(5);
        // human lands Safe; rival bails Wild and goes down on turn 2
        let verdict = Bout::new(&catalog).turn(2, &mut human, &mut rival, &Fixed(0), &Fixed(1), rng);
        let verdict = verdict.expect("stoppage");
        assert!(verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Injury);
        assert_eq!(rival.health, 0);
    }

    #[test]
    fn human_injury_forfeits_before_the_rival_acts() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        human.health = 1;
        let ref mut rng = SmallRng::seed_from_u64(5);
        let verdict = Bout::new(&catalog).turn(1, &mut human, &mut rival, &Fixed(1), &Fixed(0), rng);
        let verdict = verdict.expect("stoppage");
        assert!(!verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Injury);
        // the rival never took a turn in that cycle
        assert_eq!(rival.score, 0.0);
        assert_eq!(rival.health, crate::MAX_HEALTH);
    }

    #[test]
    fn landing_every_trick_wins_on_points() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        let ref mut rng = SmallRng::seed_from_u64(9);
        // rival bails Sketchy all match; nobody gets hurt, all turns play out
        let verdict = Bout::new(&catalog).run(&mut human, &mut rival, &Fixed(0), &Fixed(2), rng);
        assert!(verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Outscored);
        assert!(human.score >= 60.0);
        assert_eq!(human.health, crate::MAX_HEALTH);
        assert_eq!(rival.health, crate::MAX_HEALTH);
    }

    #[test]
    fn grinding_down_the_rival_stops_the_match() {
        let catalog = lab();
        let (mut human, mut rival) = pair(&catalog);
        let ref mut rng = SmallRng::seed_from_u64(9);
        // Wild injures the rival every turn; the third bail is the stoppage
        let verdict = Bout::new(&catalog).run(&mut human, &mut rival, &Fixed(0), &Fixed(1), rng);
        assert!(verdict.human_won);
        assert_eq!(verdict.ruling, Ruling::Injury);
        assert_eq!(rival.health, 0);
    }

    #[test]
    fn human_score_carries_across_bouts() {
        let catalog = lab();
        let (mut human, _) = pair(&catalog);
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut first = Competitor::challenger("Sam", 1, &catalog);
        Bout::new(&catalog).run(&mut human, &mut first, &Fixed(0), &Fixed(1), rng);
        let banked = human.score;
        assert!(banked > 0.0);
        let mut second = Competitor::challenger("Sean", 2, &catalog);
        Bout::new(&catalog).run(&mut human, &mut second, &Fixed(0), &Fixed(1), rng);
        assert!(human.score > banked);
        // the fresh rival never inherits the previous rival's slate
        assert!(second.score <= 0.0);
    }

    #[test]
    fn full_match_against_the_robot_reaches_a_verdict() {
        let catalog = Catalog::standard();
        let ref mut rng = SmallRng::seed_from_u64(13);
        for _ in 0..20 {
            let (mut human, mut rival) = pair(&catalog);
            let verdict = Bout::new(&catalog).run(&mut human, &mut rival, &Robot, &Robot, rng);
            assert!(human.health <= crate::MAX_HEALTH);
            assert!(rival.health <= crate::MAX_HEALTH);
            assert!(!verdict.winner.is_empty());
        }
    }
}
