use std::sync::mpsc::Sender;

use svslink_registry::ValueSet;

/// Whether an observer wants further value sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Continue,
    Detach,
}

/// Receives every non-empty value set a session decodes.
pub trait Observer {
    fn on_values(&mut self, values: &ValueSet) -> Delivery;
}

impl<F> Observer for F
where
    F: FnMut(&ValueSet),
{
    fn on_values(&mut self, values: &ValueSet) -> Delivery {
        self(values);
        Delivery::Continue
    }
}

/// Event-channel delivery. A dropped receiver detaches the observer.
impl Observer for Sender<ValueSet> {
    fn on_values(&mut self, values: &ValueSet) -> Delivery {
        match self.send(values.clone()) {
            Ok(()) => Delivery::Continue,
            Err(_) => Delivery::Detach,
        }
    }
}
