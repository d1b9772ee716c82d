use std::cell::RefCell;

use super::Topic;

type Handler = Box<dyn FnMut(Topic)>;

/// A simple event bus for broadcasting editor notifications to registered handlers.
///
/// Handlers are called synchronously, in subscription order, and only for
/// the topic they subscribed to. A handler must not emit on the same bus.
pub struct EventBus {
    handlers: RefCell<Vec<(Topic, Handler)>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events on `topic`
    pub fn subscribe(&self, topic: Topic, handler: impl FnMut(Topic) + 'static) {
        self.handlers.borrow_mut().push((topic, Box::new(handler)));
    }

    /// Emit an event to every handler registered for its topic
    pub fn emit(&self, topic: Topic) {
        log::trace!("emit {topic}");
        for (_, handler) in self
            .handlers
            .borrow_mut()
            .iter_mut()
            .filter(|(subscribed, _)| *subscribed == topic)
        {
            handler(topic);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}
