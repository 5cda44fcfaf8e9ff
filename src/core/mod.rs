pub mod caesar;

pub use crate::domain::model::Shift;
pub use caesar::{decode, encode};
