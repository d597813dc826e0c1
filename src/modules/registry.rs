//! Static registry of business modules
//!
//! Built once at startup and shared read-only by every conversation.

use super::{build, MenuModule, ModuleName, ModuleSettings};
use crate::menu::EXIT_OPTION;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Registry entry binding an option number and canonical name to a module
#[derive(Clone)]
pub struct ModuleDescriptor {
    option: u32,
    name: ModuleName,
    module: Arc<dyn MenuModule>,
}

impl ModuleDescriptor {
    pub fn new(option: u32, name: ModuleName, module: Arc<dyn MenuModule>) -> Self {
        Self {
            option,
            name,
            module,
        }
    }

    pub fn option(&self) -> u32 {
        self.option
    }

    pub fn name(&self) -> ModuleName {
        self.name
    }

    pub fn module(&self) -> &dyn MenuModule {
        self.module.as_ref()
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("option", &self.option)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Misconfiguration detected while building the registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("option {option} for module {name} is outside 1..=13")]
    OptionOutOfRange { option: u32, name: ModuleName },
    #[error("option {option} registered twice")]
    DuplicateOption { option: u32 },
    #[error("module {0} registered twice")]
    DuplicateName(ModuleName),
}

/// Immutable option → module table
#[derive(Debug)]
pub struct ModuleRegistry {
    by_option: BTreeMap<u32, ModuleDescriptor>,
    by_name: HashMap<ModuleName, u32>,
}

impl ModuleRegistry {
    /// Build from explicit descriptors, rejecting overlaps and the reserved
    /// exit option.
    pub fn new(
        descriptors: impl IntoIterator<Item = ModuleDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut by_option = BTreeMap::new();
        let mut by_name = HashMap::new();

        for descriptor in descriptors {
            let (option, name) = (descriptor.option, descriptor.name);
            if option == 0 || option >= EXIT_OPTION {
                return Err(RegistryError::OptionOutOfRange { option, name });
            }
            if by_option.contains_key(&option) {
                return Err(RegistryError::DuplicateOption { option });
            }
            if by_name.insert(name, option).is_some() {
                return Err(RegistryError::DuplicateName(name));
            }
            by_option.insert(option, descriptor);
        }

        Ok(Self { by_option, by_name })
    }

    /// The thirteen modules of the standard main menu
    pub fn standard(settings: &ModuleSettings) -> Result<Self, RegistryError> {
        Self::new(
            ModuleName::ALL
                .into_iter()
                .map(|name| ModuleDescriptor::new(name.option(), name, build(name, settings))),
        )
    }

    pub fn lookup_by_option(&self, option: u32) -> Option<&ModuleDescriptor> {
        self.by_option.get(&option)
    }

    /// Exact match on the canonical name
    pub fn lookup_by_current_menu(&self, name: ModuleName) -> Option<&ModuleDescriptor> {
        self.by_name
            .get(&name)
            .and_then(|option| self.by_option.get(option))
    }

    /// Registered canonical names in option order
    pub fn names(&self) -> Vec<ModuleName> {
        self.by_option.values().map(ModuleDescriptor::name).collect()
    }

    pub fn len(&self) -> usize {
        self.by_option.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_option.is_empty()
    }
}
