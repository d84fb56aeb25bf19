pub mod bezier;
pub mod lanes;
