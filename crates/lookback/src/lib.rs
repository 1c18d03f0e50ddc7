// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! lookback library
//!
//! This module exports the session model that projects git history into a
//! host's source-control view, for use by hosts and integration tests.

pub mod config;
pub mod resource;
pub mod session;
pub mod sink;

pub use resource::{Decorations, IconSet, OpenCommand, Resource, Theme};
pub use session::{ResourceSink, Session};
