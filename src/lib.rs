//! Evclash - Detect schedule clashes between registered college events
//!
//! This library provides the core functionality for finding out whether the
//! events a student has signed up for overlap in time. Each event carries a
//! timeline of segments (opening ceremony, workshop, finals...), and a clash is
//! any pair of segments from two different events whose time windows overlap.
//!
//! # Architecture
//!
//! The library is organized into focused modules:
//!
//! - **schedule** - Event data model, slot construction, clash detection and
//!   the registration lookup interface with its JSON catalog implementation
//! - **report** - Response envelopes shaped for API-style consumers
//!
//! # Usage
//!
//! This library can be used in multiple ways:
//!
//! 1. **CLI tool** (`src/main.rs`) - Command-line interface for students and organizers
//! 2. **Library** - Rust code can load a catalog (or implement [`EventStore`]) and
//!    call the detector directly
//!
//! # Example
//!
//! ```rust,no_run
//! use evclash::{Catalog, student_clashes};
//!
//! // Load events, registrations and teams from disk
//! let catalog = Catalog::load("events.json").expect("Failed to load catalog");
//!
//! // Check everything the student is registered for
//! let clashes = student_clashes(&catalog, "student-42").expect("Lookup failed");
//!
//! for clash in clashes {
//!     println!("{}", clash.message);
//! }
//! ```

pub mod report;
pub mod schedule;

pub use schedule::*;
