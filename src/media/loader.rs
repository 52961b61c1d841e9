// SPDX-License-Identifier: MPL-2.0
//! Generation-tagged dimension loading.
//!
//! Every configuration change starts a new run and receives a fresh
//! [`LoadTicket`]. Only the ticket of the most recent run is accepted when
//! results come back, so a slow run for an older image set can never
//! overwrite newer layout state.

use super::{DimensionSource, ProbedImage};
use crate::error::Error;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;

/// Identifies one loader run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Result of resolving every image of one configuration.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// All images resolved, in input order.
    Resolved(Vec<ProbedImage>),
    /// At least one image failed or timed out. The configuration never
    /// becomes ready.
    Stalled { source: String, error: Error },
}

/// Tracks which loader run is current and whether any run has completed.
#[derive(Debug, Default)]
pub struct DimensionLoader {
    generation: u64,
    pending: Option<LoadTicket>,
    is_loaded: bool,
}

impl DimensionLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run, superseding any run still in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.pending = Some(ticket);
        ticket
    }

    /// Returns true if `ticket` belongs to the run that is still awaited.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Accepts a successful result. Returns false for superseded runs, whose
    /// result must be dropped.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        self.is_loaded = true;
        true
    }

    /// Retires a stalled run. Previous layout state is left untouched.
    pub fn stall(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Discards whatever run is in flight without starting another.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the run still awaited, if any.
    #[must_use]
    pub fn pending(&self) -> Option<LoadTicket> {
        self.pending
    }
}

/// Resolves every source in parallel, preserving input order.
///
/// Without a `timeout`, a source that never answers keeps the whole run
/// pending forever.
pub async fn resolve_dimensions(
    resolver: Arc<dyn DimensionSource>,
    sources: Vec<String>,
    timeout: Option<Duration>,
) -> LoadOutcome {
    let probes = sources.into_iter().map(|source| {
        let probe = resolver.probe(&source);
        async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, probe)
                    .await
                    .unwrap_or_else(|_| Err(Error::Timeout(source.clone()))),
                None => probe.await,
            };
            result.map_err(|error| (source, error))
        }
    });

    let mut probed = Vec::new();
    for result in join_all(probes).await {
        match result {
            Ok(image) => probed.push(image),
            Err((source, error)) => return LoadOutcome::Stalled { source, error },
        }
    }
    LoadOutcome::Resolved(probed)
}
