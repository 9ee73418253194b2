//! Declared-only and transitive resolution walks over class hierarchies.
//!
//! Transitive walks visit the target class first and then each superclass
//! in turn, so results come back most-derived-first, declaration order
//! within a level. Each level contributes only its own declarations, so
//! members never repeat; interfaces can recur across levels and are
//! deduplicated.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::filter::{Annotated, ClassFilter, ConstructorFilter, FieldFilter, MethodFilter};
use crate::meta::{Class, Constructor, Field, Method};

/// The target class followed by its superclasses, root last.
pub fn hierarchy<'a>(target: Class<'a>) -> impl Iterator<Item = Class<'a>> {
    std::iter::successors(Some(target), |class| class.superclass())
}

/// Methods declared directly on `class` that pass the filter.
pub fn declared_methods<'a>(class: Class<'a>, filter: &dyn MethodFilter) -> Vec<Method<'a>> {
    class
        .declared_methods()
        .filter(|method| filter.accepts(*method))
        .collect()
}

/// Methods declared on `target` or any of its superclasses that pass the
/// filter, most-derived-first.
pub fn methods<'a>(target: Class<'a>, filter: &dyn MethodFilter) -> Vec<Method<'a>> {
    trace!(target = %target.qualified_name(), filter = %filter.describe(), "collecting methods");
    hierarchy(target)
        .flat_map(|class| declared_methods(class, filter))
        .collect()
}

/// First transitive match, or `None`. The most-derived declaration wins.
pub fn method<'a>(target: Class<'a>, filter: &dyn MethodFilter) -> Option<Method<'a>> {
    hierarchy(target).find_map(|class| {
        class
            .declared_methods()
            .find(|method| filter.accepts(*method))
    })
}

/// Fields declared directly on `class` that pass the filter.
pub fn declared_fields<'a>(class: Class<'a>, filter: &dyn FieldFilter) -> Vec<Field<'a>> {
    class
        .declared_fields()
        .filter(|field| filter.accepts(*field))
        .collect()
}

/// Fields declared on `target` or any of its superclasses that pass the
/// filter, most-derived-first.
pub fn fields<'a>(target: Class<'a>, filter: &dyn FieldFilter) -> Vec<Field<'a>> {
    trace!(target = %target.qualified_name(), filter = %filter.describe(), "collecting fields");
    hierarchy(target)
        .flat_map(|class| declared_fields(class, filter))
        .collect()
}

/// Interfaces declared directly on `class` that pass the filter, in
/// declaration order.
pub fn declared_interfaces<'a>(class: Class<'a>, filter: &dyn ClassFilter) -> Vec<Class<'a>> {
    class
        .interfaces()
        .filter(|interface| filter.accepts(*interface))
        .collect()
}

/// Interfaces declared by `target` or any of its superclasses that pass
/// the filter. Only the class chain is walked; interfaces extended by
/// other interfaces are not visited.
pub fn interfaces<'a>(target: Class<'a>, filter: &dyn ClassFilter) -> Vec<Class<'a>> {
    let mut seen = FxHashSet::default();
    let mut found = Vec::new();
    for class in hierarchy(target) {
        for interface in class.interfaces() {
            if filter.accepts(interface) && seen.insert(interface.id()) {
                found.push(interface);
            }
        }
    }
    found
}

/// First transitive interface match, or `None`.
pub fn interface<'a>(target: Class<'a>, filter: &dyn ClassFilter) -> Option<Class<'a>> {
    hierarchy(target).find_map(|class| {
        class
            .interfaces()
            .find(|interface| filter.accepts(*interface))
    })
}

/// Constructors declared on `class` that pass the filter. Constructors are
/// not inherited; there is no transitive variant.
pub fn constructors<'a>(
    class: Class<'a>,
    filter: &dyn ConstructorFilter,
) -> Vec<Constructor<'a>> {
    class
        .declared_constructors()
        .filter(|constructor| filter.accepts(*constructor))
        .collect()
}

/// For each annotation type, the transitively visible methods carrying it,
/// optionally intersected with an extra filter. The result map iterates in
/// the order the annotation types were given.
pub fn annotated_methods<'a>(
    target: Class<'a>,
    filter: Option<&dyn MethodFilter>,
    annotations: &[Class<'a>],
) -> IndexMap<Class<'a>, Vec<Method<'a>>> {
    annotations
        .iter()
        .map(|annotation| {
            let annotated = Annotated::new(*annotation);
            let mut matches = Vec::new();
            for class in hierarchy(target) {
                for method in class.declared_methods() {
                    if MethodFilter::accepts(&annotated, method)
                        && filter.is_none_or(|extra| extra.accepts(method))
                    {
                        matches.push(method);
                    }
                }
            }
            (*annotation, matches)
        })
        .collect()
}
