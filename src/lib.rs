//! # Design Patterns Catalog
//!
//! Runnable demos for five classic object-oriented patterns, each
//! self-contained and independent of the others:
//!
//! - **Capability segregation**: narrow movement traits (`CanWalk`,
//!   `CanSwim`) instead of one monolithic animal interface
//! - **Decorator**: a wrapper chain augmenting a base operation's result
//! - **Singleton**: a process-wide, lazily-initialized instance accessor
//! - **Adapter**: a legacy game-port joystick behind a USB-shaped interface
//! - **Builder**: fluent, step-wise assembly of a game character
//!
//! Output goes through the [`console::Console`] sink so tests can capture
//! lines in memory instead of reading process stdout.
//!
//! Run individual demos with:
//! ```bash
//! cargo run --bin p1_capabilities
//! cargo run --bin p2_decorator
//! cargo run --bin p3_singleton
//! cargo run --bin p4_adapter
//! cargo run --bin p5_builder
//! ```

pub mod adapter;
pub mod builder;
pub mod capabilities;
pub mod console;
pub mod decorator;
pub mod singleton;
