//! Domain layer for the Spaces payload view.
//!
//! This module contains the typed projections over the raw API payload,
//! independent of any transport or client concerns.

pub mod error;
pub mod space;
pub mod state;

pub use error::SpaceError;
pub use space::SpaceView;
pub use state::SpaceState;
