//! Host-facing surface: port metadata, descriptor registry, and the unit
//! lifecycle (instantiate, connect, run, drop).
//!
//! The processing core in [`crate::voice`] knows nothing about ports; this
//! module adapts it to the four-port contract a plugin host drives and
//! serves the range hints a host needs for its own UI and validation.

mod descriptor;
mod unit;

pub use descriptor::{
    PortDefault, PortInfo, PortKind, PortRole, RangeHint, Registry, UnitDescriptor, descriptor,
};
pub use unit::{HatUnit, PortError};
