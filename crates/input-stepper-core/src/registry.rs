//! One controller per root element.

use crate::config::StepperConfig;
use crate::handle::StepperHandle;
use crate::host::{BindError, ElementKey, StepperHost};
use rustc_hash::FxHashMap;
use std::fmt;

/// Result of a bind request.
pub enum Binding<H: StepperHost> {
    /// A new controller was created.
    Bound(StepperHandle<H>),
    /// The root already had one; nothing was touched.
    AlreadyBound(StepperHandle<H>),
}

impl<H: StepperHost> fmt::Debug for Binding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Bound(handle) => f.debug_tuple("Bound").field(handle).finish(),
            Binding::AlreadyBound(handle) => f.debug_tuple("AlreadyBound").field(handle).finish(),
        }
    }
}

impl<H: StepperHost> Binding<H> {
    pub fn handle(&self) -> &StepperHandle<H> {
        match self {
            Binding::Bound(handle) | Binding::AlreadyBound(handle) => handle,
        }
    }

    pub fn into_handle(self) -> StepperHandle<H> {
        match self {
            Binding::Bound(handle) | Binding::AlreadyBound(handle) => handle,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }
}

/// Bound steppers keyed by root identity.
pub struct StepperRegistry<H: StepperHost> {
    instances: FxHashMap<ElementKey, StepperHandle<H>>,
}

impl<H: StepperHost> Default for StepperRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StepperHost> StepperRegistry<H> {
    pub fn new() -> Self {
        Self {
            instances: FxHashMap::default(),
        }
    }

    /// Binds `host` unless it already carries a stepper.
    ///
    /// A failed bind leaves the registry unchanged, so the root may be bound
    /// again once its markup is fixed.
    pub fn bind(&mut self, host: H, config: &StepperConfig) -> Result<Binding<H>, BindError> {
        let key = host.key();
        if let Some(existing) = self.instances.get(&key) {
            log::trace!("stepper {key} already bound");
            return Ok(Binding::AlreadyBound(existing.clone()));
        }

        let handle = StepperHandle::bind(host, config.clone())?;
        log::debug!("bound stepper {key} at {}", handle.amount());
        self.instances.insert(key, handle.clone());
        Ok(Binding::Bound(handle))
    }

    pub fn get(&self, key: ElementKey) -> Option<&StepperHandle<H>> {
        self.instances.get(&key)
    }

    pub fn contains(&self, key: ElementKey) -> bool {
        self.instances.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
