//! Best-effort geolocation with a silent fallback.
//!
//! A [`Locator`] wraps a [`PositionSource`] behind a timeout. Acquisition
//! never fails from the caller's perspective: any source error, timeout, or
//! absent capability yields the configured fallback coordinate, and callers
//! never branch on how the coordinate was obtained.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use arogya_core::types::Coordinate;

/// Fallback position for the chat flow when no fix is available
/// (Ahmedabad city center).
pub const DEFAULT_POSITION: Coordinate = Coordinate {
    lat: 23.0225,
    lon: 72.5714,
};

/// Fallback position for the map view when no fix is available
/// (Anand city center).
pub const MAP_FALLBACK_POSITION: Coordinate = Coordinate {
    lat: 22.55,
    lon: 72.95,
};

/// How long to wait for a position fix before falling back.
pub const DEFAULT_FIX_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a position source produced no fix. Absorbed by [`Locator`]; only
/// logged, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("no location capability available")]
    Unavailable,
    #[error("position fix failed: {0}")]
    Failed(String),
}

/// A one-shot position capability.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn position(&self) -> Result<Coordinate, PositionError>;
}

/// A source pinned to a fixed coordinate (operator-configured position).
pub struct FixedPosition(pub Coordinate);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn position(&self) -> Result<Coordinate, PositionError> {
        Ok(self.0)
    }
}

/// The absent capability: every request fails, exercising the fallback.
pub struct NoPosition;

#[async_trait]
impl PositionSource for NoPosition {
    async fn position(&self) -> Result<Coordinate, PositionError> {
        Err(PositionError::Unavailable)
    }
}

/// Best-effort coordinate provider.
pub struct Locator {
    source: Box<dyn PositionSource>,
    timeout: Duration,
    fallback: Coordinate,
}

impl Locator {
    pub fn new(source: Box<dyn PositionSource>, timeout: Duration, fallback: Coordinate) -> Self {
        Self {
            source,
            timeout,
            fallback,
        }
    }

    /// A locator with the default timeout and the chat-flow fallback.
    pub fn with_defaults(source: Box<dyn PositionSource>) -> Self {
        Self::new(source, DEFAULT_FIX_TIMEOUT, DEFAULT_POSITION)
    }

    /// Acquire the current position. Never fails: source errors and
    /// timeouts silently resolve to the fallback coordinate.
    pub async fn current(&self) -> Coordinate {
        match tokio::time::timeout(self.timeout, self.source.position()).await {
            Ok(Ok(position)) => position,
            Ok(Err(e)) => {
                debug!(error = %e, "Position fix failed; using fallback");
                self.fallback
            }
            Err(_) => {
                debug!(timeout_secs = self.timeout.as_secs(), "Position fix timed out; using fallback");
                self.fallback
            }
        }
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }
}
