pub mod extension;
pub mod intension;
pub mod mdd;
pub mod regular;
