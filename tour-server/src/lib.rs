//! Tour document server
//!
//! HTTP service that turns a finalized tour's order summary into a
//! printable instructions PDF with scannable SKU barcodes, and proxies
//! ShipHero token refreshes for browser clients.
//!
//! # Module structure
//!
//! ```text
//! tour-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── instructions/  # Document build orchestration
//! ├── store/         # Tour record access
//! └── utils/         # Logger
//! ```

pub mod api;
pub mod core;
pub mod instructions;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use instructions::InstructionsService;
pub use store::{MemoryTourStore, TourStore};
pub use utils::logger::init_logger;

/// Load `.env` and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
  _____                  ___
 |_   _|__  _   _ _ __  |   \ ___  __ ___
   | |/ _ \| | | | '__| | |) / _ \/ _(_-<
   |_|\___/ \__,_|_|    |___/\___/\__/__/
    "#
    );
}
