//! Class- and package-keyed value resolution.
//!
//! Both maps are populated once and read-only afterwards; lookups walk
//! from the most specific key toward more general ones and stop at the
//! first hit.

use rustc_hash::FxHashMap;

use crate::meta::{Class, TypeId};

/// Maps classes to values, resolving through the key's hierarchy.
///
/// A lookup tries the queried class itself, then its directly declared
/// interfaces in declaration order, then repeats both checks on the
/// superclass, until a value is found or the chain ends.
///
/// ```
/// # use reflekt::{ClassDecl, ClassMap, TypeRegistry};
/// # let mut reg = TypeRegistry::new();
/// # let object = reg.object_type().id();
/// # let number = reg.declare(ClassDecl::new("lang.Number").extends(object)).unwrap();
/// # let integer = reg.declare(ClassDecl::new("lang.Integer").extends(number)).unwrap();
/// let mut map = ClassMap::new();
/// map.insert(reg.class(number), "number");
/// assert_eq!(map.get(reg.class(integer)), Some(&"number"));
/// ```
pub struct ClassMap<V> {
    entries: FxHashMap<TypeId, V>,
    exclude_interfaces: bool,
}

impl<V> ClassMap<V> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            exclude_interfaces: false,
        }
    }

    /// Skips the interface check at every level of the lookup walk.
    pub fn set_exclude_interfaces(&mut self, exclude: bool) {
        self.exclude_interfaces = exclude;
    }

    pub fn insert(&mut self, class: Class<'_>, value: V) {
        self.entries.insert(class.id(), value);
    }

    /// Resolves the value registered for `class`, its interfaces, or its
    /// superclasses, most specific first.
    pub fn get(&self, class: Class<'_>) -> Option<&V> {
        let mut current = Some(class);
        while let Some(inspected) = current {
            if let Some(value) = self.entries.get(&inspected.id()) {
                return Some(value);
            }
            if !self.exclude_interfaces {
                if let Some(value) = self.get_by_interfaces(inspected) {
                    return Some(value);
                }
            }
            current = inspected.superclass();
        }
        None
    }

    /// The value registered for any of the class's directly declared
    /// interfaces, first match in declaration order.
    pub fn get_by_interfaces(&self, class: Class<'_>) -> Option<&V> {
        class
            .interfaces()
            .find_map(|interface| self.entries.get(&interface.id()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ClassMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps dotted package names to values, resolving through parent packages.
///
/// A lookup tries the exact package, then strips the last segment and
/// retries, until a value is found or no segments remain: the longest
/// registered prefix wins.
pub struct PackageMap<V> {
    entries: FxHashMap<String, V>,
}

impl<V> PackageMap<V> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, package: &str, value: V) {
        self.entries.insert(package.to_string(), value);
    }

    /// Resolves the value for the longest registered prefix of `package`.
    pub fn get(&self, package: &str) -> Option<&V> {
        let mut name = package;
        loop {
            if let Some(value) = self.entries.get(name) {
                return Some(value);
            }
            match name.rsplit_once('.') {
                Some((parent, _)) => name = parent,
                None => return None,
            }
        }
    }

    /// Resolves the value for the package of `class`.
    pub fn get_for_class(&self, class: Class<'_>) -> Option<&V> {
        self.get(class.package_name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for PackageMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for PackageMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
