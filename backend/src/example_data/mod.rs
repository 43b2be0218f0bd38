//! Startup wiring for example data seeding.

mod config;
mod dataset;
mod startup;

pub use config::ExampleDataSettings;
pub use dataset::{SeedClient, SeedDataset, SeedJob, SeedOrder, SeedUser};
pub use startup::{SeedOutcome, StartupSeedingError, seed_example_data_on_startup};
