//! switchdeck-core — section routing engine for single-page hosts.
//!
//! Tracks which of a set of mutually-exclusive named sections is visible,
//! switches between them (optionally after a delay), toggles active styling
//! on the corresponding elements and trigger buttons, and optionally
//! persists the active section across runs.
//!
//! The router talks to its environment through three capability traits:
//! - [`page::Page`] — element lookup, trigger discovery, styling toggles
//! - [`store::StateStore`] — string key-value persistence (two scopes ship:
//!   [`store::SessionStore`] and [`store::FileStore`])
//! - [`schedule::Scheduler`] — cancellable deferred execution
//!   ([`schedule::ManualScheduler`] gives tests a deterministic clock)
//!
//! The host event loop feeds trigger activations to
//! [`router::SectionRouter::activate`] and drains due timers with
//! [`router::SectionRouter::pump`] each tick.

pub mod config;
pub mod error;
pub mod page;
pub mod router;
pub mod schedule;
pub mod section;
pub mod store;

pub use config::{PageLoad, RouterHooks, RouterOptions, TriggerClick};
pub use error::RouterError;
pub use page::{ElementId, MemoryPage, Page, Trigger};
pub use router::SectionRouter;
pub use schedule::{ManualScheduler, Scheduler, TimerHandle, WallClockScheduler};
pub use section::SectionId;
pub use store::{FileStore, SessionStore, StateStore, SAVED_SECTION_KEY};
