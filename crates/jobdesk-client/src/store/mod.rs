//! Client-side caches.
//!
//! Each store is the only writer of its state. Readers take snapshots or
//! subscribe to a [`tokio::sync::watch`] channel and re-render on change.

mod jobs;
mod session;

pub use jobs::{JobsState, JobsStore};
pub use session::{SessionState, SessionStore};

use tokio::sync::watch;

/// State carrying a count of backend calls in flight.
trait InFlight {
    fn in_flight_mut(&mut self) -> &mut usize;
}

impl InFlight for SessionState {
    fn in_flight_mut(&mut self) -> &mut usize {
        &mut self.in_flight
    }
}

impl InFlight for JobsState {
    fn in_flight_mut(&mut self) -> &mut usize {
        &mut self.in_flight
    }
}

/// Holds one unit of the in-flight count until dropped.
struct InFlightGuard<'a, S: InFlight> {
    state: &'a watch::Sender<S>,
}

impl<'a, S: InFlight> InFlightGuard<'a, S> {
    fn enter(state: &'a watch::Sender<S>) -> Self {
        state.send_modify(|current| *current.in_flight_mut() += 1);
        Self { state }
    }
}

impl<S: InFlight> Drop for InFlightGuard<'_, S> {
    fn drop(&mut self) {
        self.state.send_modify(|current| {
            let count = current.in_flight_mut();
            *count = count.saturating_sub(1);
        });
    }
}

/// Run `call` counted as in flight. The count is released when the call
/// finishes or when this future is dropped part-way.
async fn while_loading<S, T, E, F>(state: &watch::Sender<S>, call: F) -> Result<T, E>
where
    S: InFlight,
    F: Future<Output = Result<T, E>>,
{
    let _guard = InFlightGuard::enter(state);
    call.await
}
