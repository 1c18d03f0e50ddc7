// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Resource sinks for hosts without a UI
//!
//! [`JsonSink`] stands in for an editor's resource container: every published
//! list is written as one JSON document.
//!
//! Publishing cannot fail at the sink boundary, so the first write error is
//! parked in a [`WriteErrorSlot`] the host can check once the session has
//! published.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::resource::Resource;
use crate::session::ResourceSink;

/// Shared handle to the first error a [`JsonSink`] hit while writing
#[derive(Debug, Clone, Default)]
pub struct WriteErrorSlot(Arc<Mutex<Option<io::Error>>>);

impl WriteErrorSlot {
    /// Take the recorded error, leaving the slot empty
    #[must_use]
    pub fn take(&self) -> Option<io::Error> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }

    fn record(&self, error: io::Error) {
        if let Ok(mut slot) = self.0.lock() {
            slot.get_or_insert(error);
        }
    }
}

/// Writes each published resource list to `W` as JSON
pub struct JsonSink<W: Write + Send> {
    writer: W,
    pretty: bool,
    errors: WriteErrorSlot,
}

impl<W: Write + Send> JsonSink<W> {
    /// Compact JSON, one document per line
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
            errors: WriteErrorSlot::default(),
        }
    }

    /// Indented JSON
    pub fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            errors: WriteErrorSlot::default(),
        }
    }

    /// Handle to the first write error, usable after the sink is boxed
    #[must_use]
    pub fn error_slot(&self) -> WriteErrorSlot {
        self.errors.clone()
    }

    /// Take the first write error, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.errors.take()
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, resources: &[Resource]) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, resources)?;
        } else {
            serde_json::to_writer(&mut self.writer, resources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write + Send> ResourceSink for JsonSink<W> {
    fn publish(&mut self, resources: &[Resource]) {
        if let Err(e) = self.write(resources) {
            warn!(error = %e, "failed to write resources");
            self.errors.record(e);
        }
    }
}
