//! Hand-off seam between validated requests and the network layer.
//!
//! # Responsibility
//! - Define the contract a transport implementation fulfils.
//! - Guarantee that only validated envelopes reach a transport.
//!
//! # Invariants
//! - `submit` never calls `Transport::send` when validation fails.
//! - No transport implementation lives in this crate.

use crate::request::{Request, RequestError};
use log::{info, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sends a finalized envelope to the remote API.
pub trait Transport {
    type Error: Error + 'static;

    fn send(&self, action: &str, payload: &Map<String, Value>) -> Result<(), Self::Error>;
}

/// Error returned by `submit`.
#[derive(Debug)]
pub enum SubmitError<E> {
    /// Rejected locally; nothing was sent.
    Invalid(RequestError),
    /// Transport failed after validation passed.
    Transport(E),
}

impl<E: Display> Display for SubmitError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "transport failed: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for SubmitError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Transport(err) => Some(err),
        }
    }
}

impl<E> From<RequestError> for SubmitError<E> {
    fn from(value: RequestError) -> Self {
        Self::Invalid(value)
    }
}

/// Validates `request` and hands its envelope to `transport`.
pub fn submit<R, T>(request: &R, transport: &T) -> Result<(), SubmitError<T::Error>>
where
    R: Request + ?Sized,
    T: Transport + ?Sized,
{
    let payload = match request.payload() {
        Ok(payload) => payload,
        Err(err) => {
            warn!(
                "event=request_submit module=transport status=error action={} reason=invalid",
                request.action()
            );
            return Err(err.into());
        }
    };

    transport
        .send(request.action(), &payload)
        .map_err(SubmitError::Transport)?;
    info!(
        "event=request_submit module=transport status=ok action={}",
        request.action()
    );
    Ok(())
}
