//! Listener lists for controller notifications.

/// A list of listeners for one notification.
///
/// Payloads are only built when at least one listener is registered.
pub struct EventEmitter<T> {
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<T> EventEmitter<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Build the payload lazily and hand it to every listener.
    /// Returns true if anything was emitted.
    pub fn emit_with(&mut self, payload: impl FnOnce() -> T) -> bool {
        if self.listeners.is_empty() {
            return false;
        }
        let payload = payload();
        for listener in &mut self.listeners {
            listener(&payload);
        }
        true
    }
}
