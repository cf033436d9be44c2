//! Deterministic object-lifetime foundation layer
//!
//! Predictable destruction timing without a garbage collector: a
//! shared-ownership handle kernel ([`Shared`]), owning containers built
//! on it ([`List`], [`Dict`], [`Slot`]), a mutable byte-buffer text type
//! ([`Text`]), and the failure taxonomy they share ([`MemError`]).
//!
//! One handle is one ownership claim; every container mutation that
//! stores, replaces, or removes a handle pairs exactly one retain with
//! exactly one eventual release. The whole layer is single-threaded by
//! construction.

mod error;
pub use error::*;

mod shared;
pub use shared::*;

mod text;
pub use text::*;

mod tmpl;
pub use tmpl::*;

mod slot;
pub use slot::*;

mod list;
pub use list::*;

mod dict;
pub use dict::*;
