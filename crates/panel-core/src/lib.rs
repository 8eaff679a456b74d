//! Platform-free core of the Z906 front panel.
//!
//! Nothing in this crate touches web APIs; the web frontend supplies an
//! [`Overlay`] and feeds [`PanelEvent`]s into a [`Panel`].

pub mod constants;
pub mod device;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod panel;
pub mod visibility;

pub use constants::*;
pub use device::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use layout::*;
pub use panel::*;
pub use visibility::*;
