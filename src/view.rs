//! Console presentation. Everything the player reads lives here; the engine
//! hands over structured values and this module decides how they look.

const BAR: &str = "==================================================";

/// Round titles, one per stage.
const TITLES: [&str; 3] = ["Qualifier", "Group Stage", "Grand Final"];

/// Health labels indexed by remaining health.
const FORM: [&str; 4] = ["Knocked Out", "Critical", "Injured", "Full"];

pub fn intro() {
    println!("{}", BAR);
    println!("{}", "Welcome to the World Skateboarding Championship!".bold());
    println!("Three 1v1 battles: Qualifier, Group Stage, and Final.");
    println!("Win each round by outscoring or outlasting your rival.");
    println!("{}", BAR);
}

pub fn outro(champion: bool) {
    println!("\n{}", BAR);
    if champion {
        println!("{}", "You are the new world skateboarding champion!".green().bold());
    } else {
        println!("{}", "You've been eliminated from the championship.".red());
    }
    println!("Thanks for playing. See you next season.");
}

pub fn round(round: Round) {
    let title = TITLES[(round - 1) as usize];
    println!("\n{}\n=== Round {}: {} ===", BAR, round, title.bold());
}

pub fn versus(human: &Competitor, rival: &Competitor) {
    println!("\n{} {} {}", human.name.green().bold(), "vs".dimmed(), rival.name.red().bold());
}

pub fn turn(turn: usize) {
    println!("\n{}\nTurn {}", "-".repeat(21), turn);
}

pub fn status(skater: &Competitor) {
    println!("\n{}", skater);
}

/// The tier sheet offered this turn, numbered for one-based selection.
pub fn sheet(offered: &[&Trick]) {
    println!("Available tricks:");
    for (position, trick) in offered.iter().enumerate() {
        println!("  {:>2}. {}", position + 1, trick);
    }
}

pub fn thinking(rival: &Competitor) {
    println!("\n{} lines up...", rival.name.red());
}

pub fn attempt(skater: &Competitor, trick: &Trick, outcome: &Outcome) {
    println!(
        "{} tries {}: {}   [{:.1} pts, {} {}]",
        skater.name.bold(),
        trick.name,
        outcome,
        skater.score,
        hearts(skater.health),
        form(skater.health),
    );
}

pub fn stoppage(skater: &Competitor) {
    println!("{}", format!("{} is injured and can't continue!", skater.name).red().bold());
}

pub fn scoreboard(human: &Competitor, rival: &Competitor) {
    println!("\nEnd of match");
    println!("  {:<24} {:>7.1}", human.name, human.score);
    println!("  {:<24} {:>7.1}", rival.name, rival.score);
}

pub fn verdict(verdict: &Verdict) {
    println!("\n{}", verdict);
}

/// Heart row: filled hearts for remaining health, black for spent.
pub fn hearts(health: Health) -> String {
    let left = health as usize;
    let lost = (MAX_HEALTH - health) as usize;
    format!("{}{}", "❤".repeat(left), "🖤".repeat(lost))
}

/// Health label for the scoreline.
pub fn form(health: Health) -> &'static str {
    FORM[health as usize]
}

use crate::catalog::Trick;
use crate::gameplay::{Competitor, Outcome, Verdict};
use crate::{Health, MAX_HEALTH, Round};
use colored::Colorize;
