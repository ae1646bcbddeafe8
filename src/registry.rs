//! Two-tier name registry.
//!
//! [`Registry`] backs both the lint check catalogue and the validator
//! catalogue. It holds a fixed *core* table supplied at construction and a
//! mutable *custom* table. Custom entries shadow core entries of the same
//! name on lookup; core entries are never mutated.
//!
//! # Example
//!
//! ```
//! use env_sentinel::registry::Registry;
//!
//! let mut registry = Registry::new(vec![("a".to_string(), 1), ("b".to_string(), 2)]);
//! registry.register("a", 10);
//!
//! assert_eq!(registry.get("a"), Some(&10));
//! assert_eq!(registry.get("b"), Some(&2));
//! assert_eq!(registry.get_all().count(), 3);
//! ```

/// Name to item lookup with core and custom tiers.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    core: Vec<(String, T)>,
    custom: Vec<(String, T)>,
}

impl<T> Registry<T> {
    /// Create a registry from its core entries, in order.
    pub fn new(core: impl IntoIterator<Item = (String, T)>) -> Self {
        Self {
            core: core.into_iter().collect(),
            custom: Vec::new(),
        }
    }

    /// Create a registry with no core entries.
    pub fn empty() -> Self {
        Self {
            core: Vec::new(),
            custom: Vec::new(),
        }
    }

    /// Register a custom item, replacing any custom item with the same name.
    ///
    /// A replaced entry keeps its original position in the custom tier.
    pub fn register(&mut self, name: impl Into<String>, item: T) {
        let name = name.into();
        match self.custom.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = item,
            None => self.custom.push((name, item)),
        }
    }

    /// Look up an item, preferring the custom tier.
    pub fn get(&self, name: &str) -> Option<&T> {
        Self::find(&self.custom, name).or_else(|| Self::find(&self.core, name))
    }

    /// Whether any tier holds an item with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All items: the core tier followed by the custom tier.
    ///
    /// Names present in both tiers appear twice.
    pub fn get_all(&self) -> impl Iterator<Item = &T> {
        self.core
            .iter()
            .chain(self.custom.iter())
            .map(|(_, item)| item)
    }

    /// The items that are actually in effect, one per distinct name.
    ///
    /// Core names come first in core order, each resolved through [`get`](Self::get)
    /// so an override takes the core entry's place; custom-only names follow.
    pub fn effective(&self) -> impl Iterator<Item = (&str, &T)> {
        let core = self.core.iter().map(|(name, item)| {
            let resolved = Self::find(&self.custom, name).unwrap_or(item);
            (name.as_str(), resolved)
        });
        let custom_only = self
            .custom
            .iter()
            .filter(|(name, _)| Self::find(&self.core, name).is_none())
            .map(|(name, item)| (name.as_str(), item));
        core.chain(custom_only)
    }

    /// Names of every item in effect.
    pub fn names(&self) -> Vec<&str> {
        self.effective().map(|(name, _)| name).collect()
    }

    /// Number of items in effect.
    pub fn len(&self) -> usize {
        self.effective().count()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty() && self.custom.is_empty()
    }

    fn find<'a>(tier: &'a [(String, T)], name: &str) -> Option<&'a T> {
        tier.iter().find(|(n, _)| n == name).map(|(_, item)| item)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::empty()
    }
}
