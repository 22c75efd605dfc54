use web_sys::{AbortController, AbortSignal};

/// Cancellation token for the requests issued while a dialog is open.
///
/// Dropping the scope does not abort anything; call [`RequestScope::abort`]
/// when the owning dialog closes.
pub struct RequestScope {
    controller: Option<AbortController>,
}

impl RequestScope {
    pub fn new() -> Self {
        let controller = match AbortController::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("AbortController is unavailable, requests cannot be cancelled: {:?}", e);
                None
            }
        };
        Self { controller }
    }

    /// Signal to attach to a request
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}
