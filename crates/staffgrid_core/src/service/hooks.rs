//! Edit lifecycle observers.
//!
//! # Responsibility
//! - Let the UI layer subscribe to edit start/cancel/commit and refresh
//!   notifications.
//!
//! # Invariants
//! - Observers are notified in subscription order.
//! - Observer callbacks have no return value and cannot alter control flow.

use crate::model::employee::EmployeeRecord;

/// Subscriber for grid lifecycle notifications.
///
/// All methods default to no-ops so subscribers implement only what they use.
pub trait GridObserver {
    fn on_edit_started(&mut self, _record: &EmployeeRecord) {}
    fn on_edit_cancelled(&mut self, _record: &EmployeeRecord) {}
    fn on_edit_committed(&mut self, _record: &EmployeeRecord) {}
    /// Collection changed; the surface should re-render.
    fn on_refresh_requested(&mut self) {}
}

/// Ordered observer list owned by the grid controller.
#[derive(Default)]
pub(crate) struct ObserverSet {
    observers: Vec<Box<dyn GridObserver>>,
}

impl ObserverSet {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn GridObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn edit_started(&mut self, record: &EmployeeRecord) {
        for observer in &mut self.observers {
            observer.on_edit_started(record);
        }
    }

    pub(crate) fn edit_cancelled(&mut self, record: &EmployeeRecord) {
        for observer in &mut self.observers {
            observer.on_edit_cancelled(record);
        }
    }

    pub(crate) fn edit_committed(&mut self, record: &EmployeeRecord) {
        for observer in &mut self.observers {
            observer.on_edit_committed(record);
        }
    }

    pub(crate) fn refresh_requested(&mut self) {
        for observer in &mut self.observers {
            observer.on_refresh_requested();
        }
    }
}
