//! Outcome resolution.
//!
//! A [`Resolver`] takes the player's [`Choice`], draws the computer's from
//! an injected [`Source`], and produces an immutable [`Round`] whose
//! [`Outcome`] follows the cyclic rule rock > scissors > paper > rock.
mod choice;
mod outcome;
mod resolver;
mod round;
mod source;

pub use choice::*;
pub use outcome::*;
pub use resolver::*;
pub use round::*;
pub use source::*;
