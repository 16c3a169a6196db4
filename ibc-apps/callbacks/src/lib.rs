//! Registration table of named callbacks, grouped by the module that owns them.
//!
//! Both the interchain query and the interchain accounts applications receive
//! their results in a later block than the one that issued the request. The
//! only link between the two is a persisted callback identifier, so the code
//! that must run on arrival is looked up here by name.
//!
//! The table is assembled once with a [`CallbackRegistryBuilder`] while the
//! host wires its modules together, and is frozen into a [`CallbackRegistry`]
//! afterwards. A frozen registry exposes no way to add or replace handlers.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

use alloc::collections::BTreeMap;
use core::fmt;

use displaydoc::Display;
use ibc_primitives::prelude::*;

/// Errors raised while assembling a [`CallbackRegistry`].
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum RegistryError {
    /// module name cannot be empty
    EmptyModuleName,
    /// callback identifier cannot be empty for module `{module}`
    EmptyCallbackId { module: String },
    /// callback handler already registered for module `{module}`
    ModuleAlreadyRegistered { module: String },
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

/// The ordered set of named callbacks exposed by one module.
#[derive(Clone)]
pub struct ModuleCallbacks<H> {
    callbacks: BTreeMap<String, H>,
}

impl<H> ModuleCallbacks<H> {
    pub fn new() -> Self {
        Self {
            callbacks: BTreeMap::new(),
        }
    }

    /// Adds a callback under `callback_id`, replacing any handler previously
    /// added under the same identifier.
    pub fn with(mut self, callback_id: impl Into<String>, handler: H) -> Self {
        self.callbacks.insert(callback_id.into(), handler);
        self
    }

    pub fn has(&self, callback_id: &str) -> bool {
        self.callbacks.contains_key(callback_id)
    }

    pub fn get(&self, callback_id: &str) -> Option<&H> {
        self.callbacks.get(callback_id)
    }

    /// Callback identifiers in lexicographic order.
    pub fn callback_ids(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<H> Default for ModuleCallbacks<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for ModuleCallbacks<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.callback_ids()).finish()
    }
}

/// Collects module callbacks before the registry is frozen.
pub struct CallbackRegistryBuilder<H> {
    modules: BTreeMap<String, ModuleCallbacks<H>>,
}

impl<H> CallbackRegistryBuilder<H> {
    pub fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    /// Registers the callbacks of `module`.
    ///
    /// Fails if the module is already registered: a second registration never
    /// silently overrides the first one.
    pub fn register(
        &mut self,
        module: impl Into<String>,
        callbacks: ModuleCallbacks<H>,
    ) -> Result<&mut Self, RegistryError> {
        let module = module.into();

        if module.is_empty() {
            return Err(RegistryError::EmptyModuleName);
        }

        if callbacks.callback_ids().any(str::is_empty) {
            return Err(RegistryError::EmptyCallbackId { module });
        }

        if self.modules.contains_key(&module) {
            return Err(RegistryError::ModuleAlreadyRegistered { module });
        }

        tracing::debug!(
            module = %module,
            callbacks = callbacks.len(),
            "registering callback handlers"
        );

        self.modules.insert(module, callbacks);

        Ok(self)
    }

    /// Freezes the table.
    pub fn build(self) -> CallbackRegistry<H> {
        CallbackRegistry {
            modules: self.modules,
        }
    }
}

impl<H> Default for CallbackRegistryBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only table mapping module names to their callbacks.
///
/// Modules are always visited in lexicographic order of their names, so every
/// node replaying the same block invokes the same handlers in the same order.
pub struct CallbackRegistry<H> {
    modules: BTreeMap<String, ModuleCallbacks<H>>,
}

impl<H> CallbackRegistry<H> {
    pub fn builder() -> CallbackRegistryBuilder<H> {
        CallbackRegistryBuilder::new()
    }

    /// A registry without any module, for hosts that never dispatch callbacks.
    pub fn empty() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    pub fn is_registered(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn has_callback(&self, module: &str, callback_id: &str) -> bool {
        self.modules
            .get(module)
            .map_or(false, |callbacks| callbacks.has(callback_id))
    }

    pub fn module(&self, module: &str) -> Option<&ModuleCallbacks<H>> {
        self.modules.get(module)
    }

    /// All registered modules, sorted by name.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &ModuleCallbacks<H>)> {
        self.modules
            .iter()
            .map(|(name, callbacks)| (name.as_str(), callbacks))
    }

    /// Every handler registered under `callback_id`, one per owning module,
    /// sorted by module name.
    pub fn handlers_for<'a>(
        &'a self,
        callback_id: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a H)> + 'a {
        self.modules().filter_map(move |(module, callbacks)| {
            callbacks.get(callback_id).map(|handler| (module, handler))
        })
    }

    /// The first handler, in module order, registered under `callback_id`.
    pub fn first_handler<'a>(&'a self, callback_id: &'a str) -> Option<(&'a str, &'a H)> {
        self.handlers_for(callback_id).next()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<H> fmt::Debug for CallbackRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.modules.iter()).finish()
    }
}
