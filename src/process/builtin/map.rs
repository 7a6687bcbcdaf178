use super::Builtin;
use crate::process::cd::Cd;
use crate::process::exit::Exit;
use crate::process::help::Help;
use once_cell::sync::Lazy;

/// The builtin table used by the interpreter. Populated once, never mutated afterwards.
pub static BUILTINS: Lazy<BuiltinMap> = Lazy::new(BuiltinMap::with_defaults);

/// Ordered mapping from command name to builtin handler.
///
/// Lookup is a case-sensitive exact match on the name. Iteration follows
/// registration order, which is what `help` lists.
pub struct BuiltinMap {
    entries: Vec<(&'static str, Box<dyn Builtin>)>,
}

impl BuiltinMap {
    /// An empty map.
    pub fn new() -> Self {
        BuiltinMap {
            entries: Vec::new(),
        }
    }

    /// A map holding `cd`, `help` and `exit`.
    pub fn with_defaults() -> Self {
        let mut builtin_map = Self::new();
        builtin_map.populate_func_map();
        builtin_map
    }

    pub fn populate_func_map(&mut self) {
        // If builtin map is not empty abort inital population
        if !self.is_empty() {
            return;
        }

        self.add("cd", Cd::new());
        self.add("help", Help::new());
        self.add("exit", Exit::new());
    }

    /// Register `builtin` under `func_name`, replacing any handler already bound to it.
    pub fn add(&mut self, func_name: &'static str, builtin: impl Builtin + 'static) {
        let builtin: Box<dyn Builtin> = Box::new(builtin);
        match self.entries.iter_mut().find(|(name, _)| *name == func_name) {
            Some(entry) => entry.1 = builtin,
            None => self.entries.push((func_name, builtin)),
        }
    }

    pub fn get(&self, func_name: &str) -> Option<&dyn Builtin> {
        self.entries
            .iter()
            .find(|(name, _)| *name == func_name)
            .map(|(_, builtin)| builtin.as_ref())
    }

    pub fn contains(&self, func_name: &str) -> bool {
        self.get(func_name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Names and handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn Builtin)> {
        self.entries
            .iter()
            .map(|(name, builtin)| (*name, builtin.as_ref()))
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
