// src/application/ports/mod.rs
pub mod audit;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type AuditorProviderPort = dyn audit::AuditorProvider;
pub type ClockPort = dyn time::Clock;
