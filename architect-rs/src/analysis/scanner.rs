//! Per-note connection scanning.

use crate::analysis::tier::Tier;
use crate::metadata::DocumentMetadata;
use crate::types::OutgoingLink;
use serde::Serialize;
use tracing::debug;

/// A note's tier and its outgoing links, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionMap {
    pub tier: Tier,
    pub outgoing: Vec<OutgoingLink>,
}

/// Classify a note and collect one entry per outgoing link.
pub fn scan<D: DocumentMetadata + ?Sized>(doc: &D) -> ConnectionMap {
    let tier = Tier::classify(doc.type_field().as_deref());
    let outgoing = doc.links().to_vec();
    debug!(note = doc.name(), ?tier, connections = outgoing.len(), "scanned connections");
    ConnectionMap { tier, outgoing }
}
