pub mod card;
pub mod collision;
pub mod placement;
