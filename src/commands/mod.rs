pub mod frequency;
pub mod guards;
