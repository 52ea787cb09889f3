// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Marketing attribution capture for the SZI site.
//!
//! A single persisted slot records which channel first brought a visitor to
//! the site (first touch) and which campaign most recently touched them
//! (last touch). The record is merged on every page view and attached to
//! form submissions so conversions can be traced back to a channel.
//!
//! Storage is an injected capability: hosts running in a browser back the
//! slot with durable client-side storage under [`ATTRIBUTION_STORAGE_KEY`],
//! while non-browser hosts plug in [`DisabledStorage`] and the whole module
//! degrades to a no-op. Attribution is advisory metadata; nothing here ever
//! returns an error to the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod record;
mod store;

#[cfg(test)]
mod tests;

pub use record::{AttributionRecord, PageView, format_for_notes};
pub use store::{
    ATTRIBUTION_STORAGE_KEY, AttributionStorage, AttributionStore, DisabledStorage, MemoryStorage,
};
