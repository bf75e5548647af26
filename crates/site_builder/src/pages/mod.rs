pub mod assistant;
pub mod portfolio;
