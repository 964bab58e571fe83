/// Interactive skater reading selections from the terminal.
pub struct Human;

impl Player for Human {
    fn pick(&self, skater: &Competitor, offered: &[&Trick], _: &mut SmallRng) -> usize {
        view::status(skater);
        view::sheet(offered);
        Self::selection(offered.len())
    }
}

impl Human {
    /// One-based numeric selection. Anything that is not a position in the
    /// offered sheet re-prompts without consuming the turn.
    fn selection(len: usize) -> usize {
        let choice = Input::new()
            .with_prompt("Choose a trick by number")
            .validate_with(|i: &String| -> Result<(), String> {
                parse_choice(i, len).map(|_| ()).map_err(|e| e.to_string())
            })
            .report(false)
            .interact()
            .unwrap();
        parse_choice(&choice, len).expect("validated above")
    }
}

/// Turn raw input into a zero-based index into a sheet of `len` tricks.
/// Pure so the retry policy at the boundary stays separate from validation.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, GameError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or(GameError::InvalidSelection(len))
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::catalog::Trick;
use crate::error::GameError;
use crate::gameplay::Competitor;
use crate::players::Player;
use crate::view;
use dialoguer::Input;
use rand::rngs::SmallRng;
use std::fmt::{Debug, Formatter};
