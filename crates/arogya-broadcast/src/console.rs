//! The broadcast console: compose alerts, keep the sent-log, mirror into
//! the operator inbox.
//!
//! Delivery is simulated locally: a send appends to the in-memory logs and
//! nothing leaves the process. A production implementation replaces the
//! local append with a call to a broadcast-delivery endpoint and must
//! surface partial-delivery failures distinctly from total failure.

use chrono::{DateTime, Local};
use tracing::info;

use arogya_core::types::{BroadcastRecord, InboxMessage};

/// Sender label prefix for broadcasts mirrored into the inbox.
const BROADCAST_SENDER_PREFIX: &str = "BROADCAST - ";

/// Operator console state: most-recent-first sent-log plus the inbox mirror.
/// Held only in memory for the operator's session.
#[derive(Default)]
pub struct BroadcastConsole {
    sent: Vec<BroadcastRecord>,
    inbox: Vec<InboxMessage>,
}

impl BroadcastConsole {
    /// An empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// A console whose inbox starts with the demo message set, for running
    /// without a live messaging bridge.
    pub fn with_seeded_inbox() -> Self {
        Self {
            sent: Vec::new(),
            inbox: seeded_inbox(),
        }
    }

    /// Send a broadcast. An empty or whitespace-only message is a no-op
    /// returning `None` — the submit control is disabled for it, so nothing
    /// further is surfaced to the operator.
    pub fn send(&mut self, message: &str, source: &str) -> Option<BroadcastRecord> {
        self.send_at(message, source, Local::now())
    }

    /// `send` with an explicit clock, so record stamps are testable.
    pub fn send_at(
        &mut self,
        message: &str,
        source: &str,
        now: DateTime<Local>,
    ) -> Option<BroadcastRecord> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        let record = BroadcastRecord {
            message: message.to_string(),
            source: source.to_string(),
            timestamp: now.format("%H:%M").to_string(),
            date: now.format("%Y-%m-%d").to_string(),
        };
        info!(source = %record.source, "Broadcast sent");

        self.inbox.insert(
            0,
            InboxMessage {
                sender: format!("{}{}", BROADCAST_SENDER_PREFIX, record.source),
                message: record.message.clone(),
                timestamp: record.timestamp.clone(),
                is_broadcast: true,
            },
        );
        self.sent.insert(0, record.clone());
        Some(record)
    }

    /// Sent broadcasts, most recent first.
    pub fn sent_log(&self) -> &[BroadcastRecord] {
        &self.sent
    }

    /// The inbox view: broadcasts mirrored on top of bridge messages.
    pub fn inbox(&self) -> &[InboxMessage] {
        &self.inbox
    }

    /// Replace the inbox with messages fetched from the bridge. Manual
    /// refresh only; there is no polling.
    pub fn refresh_from(&mut self, messages: Vec<InboxMessage>) {
        self.inbox = messages;
    }
}

/// The demo inbox shown when no messaging bridge is connected.
fn seeded_inbox() -> Vec<InboxMessage> {
    let seed = [
        ("User +91 9876543210", "Hi, I need info on insulin availability.", "10:30"),
        ("User +91 9123456780", "Is the generic medicine store open on Sunday?", "10:32"),
        ("User +91 9988776655", "Can I get a discount on bulk purchase?", "10:35"),
        ("User +91 8877665544", "Thank you for the location info!", "10:40"),
        ("User +91 7766554433", "Reporting a fake medicine shop near me.", "10:45"),
    ];
    seed.iter()
        .map(|(sender, message, timestamp)| InboxMessage {
            sender: sender.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            is_broadcast: false,
        })
        .collect()
}
