// The clients defined here are reqwest clients for external services.

pub mod pass;

pub use pass::PassClient;
