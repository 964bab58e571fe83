pub mod catalog;
pub use catalog::*;

pub mod trick;
pub use trick::*;

/// Which side of the match a skater plays on. The catalog's visibility rule
/// treats the two roles differently in the final round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Human,
    Opponent,
}
