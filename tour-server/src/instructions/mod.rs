//! Document build orchestration

mod service;

pub use service::InstructionsService;
