//! Store notification events
//!
//! The EventBus decouples store mutations from whatever surface renders the
//! transient notifications (the original widget toasts them). It uses
//! `tokio::sync::broadcast`: publishing is fire-and-forget, and with no
//! subscribers events are simply dropped.
//!
//! Failures never travel on the bus — they are returned as typed errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::core::restaurant::Restaurant;

/// Events published by the store after a successful operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A restaurant was added to the collection
    Added { restaurant: Restaurant },
    /// A restaurant's rating was updated
    RatingUpdated { id: Uuid, rating: u8 },
    /// A restaurant was selected by a random pick
    Picked { id: Uuid, name: String },
}

impl StoreEvent {
    /// Get the action name (added, rating_updated, picked)
    pub fn action(&self) -> &str {
        match self {
            StoreEvent::Added { .. } => "added",
            StoreEvent::RatingUpdated { .. } => "rating_updated",
            StoreEvent::Picked { .. } => "picked",
        }
    }

    /// Get the restaurant id this event relates to
    pub fn restaurant_id(&self) -> Uuid {
        match self {
            StoreEvent::Added { restaurant } => restaurant.id,
            StoreEvent::RatingUpdated { id, .. } => *id,
            StoreEvent::Picked { id, .. } => *id,
        }
    }
}

/// Envelope wrapping a store event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: StoreEvent,
}

impl EventEnvelope {
    /// Create a new event envelope
    pub fn new(event: StoreEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone (the sender is internally reference-counted) and shareable
/// across tasks.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before slow
    /// receivers start losing events (lagged).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Non-blocking and never fails; with no subscribers the event is
    /// dropped. Returns the number of receivers the event was delivered to.
    pub fn publish(&self, event: StoreEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events
    ///
    /// Events published before this call are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1024)
    }
}
