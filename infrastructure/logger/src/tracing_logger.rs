use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] port backed by `tracing`. Every event carries the name of the
/// component that emitted it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "todo_service", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "todo_service", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "todo_service", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "todo_service", component = self.component, "{}", message);
    }
}
