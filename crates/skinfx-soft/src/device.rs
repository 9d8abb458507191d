use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use thunderdome::Arena;

use skinfx_core::error::ResourceError;

/// The kind of a tracked resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Brush,
    Surface,
    Effect,
    Image,
}

#[derive(Debug)]
struct DeviceInner {
    resources: Arena<ResourceKind>,
    pending_failures: SmallVec<[ResourceError; 2]>,
}

impl Default for DeviceInner {
    fn default() -> Self {
        Self {
            resources: Arena::with_capacity(8),
            pending_failures: SmallVec::new(),
        }
    }
}

/// The owner of every resource created by a [`SoftCanvas`](crate::SoftCanvas).
///
/// Cloning a device yields another handle to the same resource tracker.
#[derive(Debug, Clone, Default)]
pub struct SoftDevice {
    inner: Rc<RefCell<DeviceInner>>,
}

impl SoftDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next operation that can fail with `error` fail with it.
    ///
    /// Queuing the same error twice makes the next two such operations fail.
    pub fn fail_next(&self, error: ResourceError) {
        self.inner.borrow_mut().pending_failures.push(error);
    }

    /// The number of resources that still have a live handle.
    pub fn live_resources(&self) -> usize {
        self.inner.borrow().resources.len()
    }

    pub fn live_resources_of(&self, kind: ResourceKind) -> usize {
        self.inner
            .borrow()
            .resources
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    /// Returns `Err(error)` if a failure of that kind was queued with
    /// [`SoftDevice::fail_next`], consuming it.
    pub(crate) fn check(&self, error: ResourceError) -> Result<(), ResourceError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(i) = inner.pending_failures.iter().position(|e| *e == error) {
            inner.pending_failures.remove(i);
            log::debug!("injected failure: {error}");
            return Err(error);
        }
        Ok(())
    }

    pub(crate) fn acquire(
        &self,
        kind: ResourceKind,
        failure: ResourceError,
    ) -> Result<ResourceHandle, ResourceError> {
        self.check(failure)?;

        let index = self.inner.borrow_mut().resources.insert(kind);
        log::trace!("acquired {kind:?} resource {index:?}");

        Ok(ResourceHandle {
            _tracked: Rc::new(Tracked {
                device: Rc::clone(&self.inner),
                index,
            }),
        })
    }
}

#[derive(Debug)]
struct Tracked {
    device: Rc<RefCell<DeviceInner>>,
    index: thunderdome::Index,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(kind) = self.device.borrow_mut().resources.remove(self.index) {
            log::trace!("released {kind:?} resource {:?}", self.index);
        }
    }
}

/// A reference-counted claim on a tracked resource.
///
/// The resource is released when the last clone is dropped.
#[derive(Debug, Clone)]
pub(crate) struct ResourceHandle {
    _tracked: Rc<Tracked>,
}
