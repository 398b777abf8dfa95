//! Player classes and their spellcasting progression.
//!
//! Each class implements the `SpellcastingClass` trait defined in `traits.rs`.
//!
//! # Supported Classes
//!
//! - Artificer (`artificer`)

mod artificer;
mod traits;

pub use artificer::Artificer;
pub use traits::{proficiency_bonus, ClassTable, ClassTableRow, SpellcastingClass};
