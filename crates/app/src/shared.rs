//! Shared device handles.
//!
//! Devices are created by the caller and handed to the controller as
//! [`Shared`] handles; a mutation made through one handle is visible through
//! every clone of it.

use std::cell::RefCell;
use std::rc::Rc;

/// Reference-counted, interiorly mutable handle to a device.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a freshly built device in a [`Shared`] handle.
#[must_use]
pub fn shared<T>(device: T) -> Shared<T> {
    Rc::new(RefCell::new(device))
}
