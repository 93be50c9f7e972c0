//! # Continuous Core
//!
//! Shape feed for the continuous-space visualization.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   frame (JSON)   ┌──────────────────────┐
//! │  Simulation          │ ───────────────▶ │  Front-end renderer  │
//! │  SimpleCanvas        │                  │  decode_frame        │
//! │  - ContinuousSpace   │                  │  - ShapeDescriptor   │
//! │  - Portrayal         │                  │  - Color             │
//! └──────────────────────┘                  └──────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod error;
pub mod portrayal;
pub mod shape;

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use portrayal::{ContinuousSpace, Portrayal, Positioned, SimpleCanvas};
pub use shape::{decode_frame, encode_frame, ShapeDescriptor};

/// Continuous core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
