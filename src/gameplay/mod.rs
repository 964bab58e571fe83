pub mod bout;
pub use bout::*;

pub mod competitor;
pub use competitor::*;

pub mod outcome;
pub use outcome::*;

pub mod verdict;
pub use verdict::*;
