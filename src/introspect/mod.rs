//! Class introspection: filtered, hierarchy-aware member lookup.
//!
//! [`ClassIntrospector`] is a thin facade over the resolution walks in
//! [`walk`]. The `x` / `declared_x` pairs follow one pattern: the declared
//! variant inspects only the target class's own declarations, the plain
//! variant also visits every superclass.
//!
//! ```
//! # use reflekt::{ClassIntrospector, MethodFilterBuilder, TypeRegistry};
//! # let reg = TypeRegistry::new();
//! # let target = reg.object_type();
//! let introspector = ClassIntrospector::new(target);
//! let getters = introspector.methods(MethodFilterBuilder::getters().as_ref());
//! ```

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::filter::{ClassFilter, ConstructorFilter, FieldFilter, MethodFilter};
use crate::meta::{
    AnnotationInstance, Class, Constructor, Field, Method, Modifiers, TypeRegistry,
};

pub mod walk;

/// Errors raised by named lookups and guarded queries.
#[derive(Debug, Error)]
pub enum IntrospectError {
    /// No method with the given name and parameter types was found.
    #[error("could not access method '{name}' on {class}")]
    MethodNotFound { class: String, name: String },

    /// No constructor passed the filter.
    #[error("no constructor found for {class} matching filter: {filter}")]
    ConstructorNotFound { class: String, filter: String },

    /// A constructor query named a type other than the introspected class.
    #[error("queried type must be the target class {target}, got {queried}")]
    TypeMismatch { target: String, queried: String },

    /// A class name could not be resolved in the registry.
    #[error("class '{0}' could not be found")]
    ClassNotFound(String),

    /// A resolved class does not extend or implement the required base.
    #[error("class {class} must extend or implement {base}")]
    NotAssignable { class: String, base: String },

    /// A method's signature does not match the expected shape.
    #[error("method '{method}' {detail}")]
    SignatureMismatch { method: String, detail: String },
}

/// Extracts class metadata: interfaces, methods, fields and constructors,
/// filtered and optionally resolved across the superclass chain.
pub struct ClassIntrospector<'a> {
    target: Class<'a>,
}

impl<'a> ClassIntrospector<'a> {
    pub fn new(target: Class<'a>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Class<'a> {
        self.target
    }

    /// The method declared directly on the target class with the given
    /// name and exact parameter types.
    pub fn declared_method(
        &self,
        name: &str,
        params: &[Class<'a>],
    ) -> Result<Method<'a>, IntrospectError> {
        trace!(class = %self.target.qualified_name(), name, "looking up declared method");
        self.target
            .declared_methods()
            .find(|method| method_matches(*method, name, params))
            .ok_or_else(|| IntrospectError::MethodNotFound {
                class: self.target.qualified_name().to_string(),
                name: name.to_string(),
            })
    }

    /// The public method with the given name and exact parameter types,
    /// declared on the target class or any of its superclasses.
    pub fn method_named(
        &self,
        name: &str,
        params: &[Class<'a>],
    ) -> Result<Method<'a>, IntrospectError> {
        trace!(class = %self.target.qualified_name(), name, "looking up method");
        walk::hierarchy(self.target)
            .find_map(|class| {
                class.declared_methods().find(|method| {
                    method.modifiers().contains(Modifiers::PUBLIC)
                        && method_matches(*method, name, params)
                })
            })
            .ok_or_else(|| IntrospectError::MethodNotFound {
                class: self.target.qualified_name().to_string(),
                name: name.to_string(),
            })
    }

    /// Methods declared directly on the target class that pass the filter.
    pub fn declared_methods(&self, filter: &dyn MethodFilter) -> Vec<Method<'a>> {
        walk::declared_methods(self.target, filter)
    }

    /// Methods declared on the target class or any superclass that pass
    /// the filter, most-derived-first.
    pub fn methods(&self, filter: &dyn MethodFilter) -> Vec<Method<'a>> {
        walk::methods(self.target, filter)
    }

    /// First transitive match; the most-derived declaration wins.
    pub fn method(&self, filter: &dyn MethodFilter) -> Option<Method<'a>> {
        walk::method(self.target, filter)
    }

    /// Fields declared directly on the target class that pass the filter.
    pub fn declared_fields(&self, filter: &dyn FieldFilter) -> Vec<Field<'a>> {
        walk::declared_fields(self.target, filter)
    }

    /// Fields declared on the target class or any superclass that pass the
    /// filter, most-derived-first.
    pub fn fields(&self, filter: &dyn FieldFilter) -> Vec<Field<'a>> {
        walk::fields(self.target, filter)
    }

    /// Interfaces declared directly on the target class that pass the
    /// filter.
    pub fn declared_interfaces(&self, filter: &dyn ClassFilter) -> Vec<Class<'a>> {
        walk::declared_interfaces(self.target, filter)
    }

    /// Interfaces declared by the target class or any superclass that pass
    /// the filter.
    pub fn interfaces(&self, filter: &dyn ClassFilter) -> Vec<Class<'a>> {
        walk::interfaces(self.target, filter)
    }

    /// First transitive interface match, or `None`.
    pub fn interface(&self, filter: &dyn ClassFilter) -> Option<Class<'a>> {
        walk::interface(self.target, filter)
    }

    /// True if an annotation of the given type is attached to the target
    /// class or any of its superclasses.
    pub fn is_annotation_present(&self, annotation: Class<'_>) -> bool {
        walk::hierarchy(self.target).any(|class| class.is_annotation_present(annotation))
    }

    /// True if any of the given annotation types is present on the target
    /// class or any of its superclasses.
    pub fn is_any_annotation_present(&self, annotations: &[Class<'_>]) -> bool {
        annotations
            .iter()
            .any(|annotation| self.is_annotation_present(*annotation))
    }

    /// The attached annotation of the given type, from the target class or
    /// the nearest superclass carrying one.
    pub fn annotation(&self, annotation: Class<'_>) -> Option<&'a AnnotationInstance> {
        walk::hierarchy(self.target).find_map(|class| class.declared_annotation(annotation))
    }

    /// Constructors of the target class that pass the filter. `of_type`
    /// must be the target class itself; constructors are not inherited.
    pub fn constructors(
        &self,
        filter: &dyn ConstructorFilter,
        of_type: Class<'a>,
    ) -> Result<Vec<Constructor<'a>>, IntrospectError> {
        if of_type != self.target {
            return Err(IntrospectError::TypeMismatch {
                target: self.target.qualified_name().to_string(),
                queried: of_type.qualified_name().to_string(),
            });
        }
        Ok(walk::constructors(self.target, filter))
    }

    /// First constructor passing the filter; an empty result is an error.
    pub fn first_constructor(
        &self,
        filter: &dyn ConstructorFilter,
        of_type: Class<'a>,
    ) -> Result<Constructor<'a>, IntrospectError> {
        self.constructors(filter, of_type)?
            .into_iter()
            .next()
            .ok_or_else(|| IntrospectError::ConstructorNotFound {
                class: self.target.qualified_name().to_string(),
                filter: filter.describe(),
            })
    }

    /// For each annotation type, the transitively visible methods carrying
    /// it, optionally intersected with an extra filter.
    pub fn annotated_methods(
        &self,
        filter: Option<&dyn MethodFilter>,
        annotations: &[Class<'a>],
    ) -> IndexMap<Class<'a>, Vec<Method<'a>>> {
        walk::annotated_methods(self.target, filter, annotations)
    }
}

fn method_matches(method: Method<'_>, name: &str, params: &[Class<'_>]) -> bool {
    method.name() == name
        && method.parameter_count() == params.len()
        && method
            .parameter_types()
            .zip(params.iter())
            .all(|(actual, expected)| actual.id() == expected.id())
}

/// Resolves a class by name and checks it extends or implements `base`.
///
/// An unknown name and a type mismatch both fail fast; there is no silent
/// fallback.
pub fn find_class_of_type<'a>(
    reg: &'a TypeRegistry,
    qualified_name: &str,
    base: Class<'a>,
) -> Result<Class<'a>, IntrospectError> {
    debug!(name = qualified_name, base = %base.qualified_name(), "resolving class");
    let class = reg
        .find(qualified_name)
        .ok_or_else(|| IntrospectError::ClassNotFound(qualified_name.to_string()))?;
    if !base.is_assignable_from(class) {
        return Err(IntrospectError::NotAssignable {
            class: qualified_name.to_string(),
            base: base.qualified_name().to_string(),
        });
    }
    Ok(class)
}

/// Verifies a method's return type and parameter types, failing fast on
/// the first mismatch.
pub fn verify_method_signature(
    method: Method<'_>,
    return_type: Class<'_>,
    params: &[Class<'_>],
) -> Result<(), IntrospectError> {
    if method.return_type().id() != return_type.id() {
        return Err(IntrospectError::SignatureMismatch {
            method: method.name().to_string(),
            detail: format!(
                "return type {} does not match: {}",
                method.return_type().qualified_name(),
                return_type.qualified_name()
            ),
        });
    }
    if method.parameter_count() != params.len() {
        return Err(IntrospectError::SignatureMismatch {
            method: method.name().to_string(),
            detail: format!(
                "number of parameters {} does not match: {}",
                method.parameter_count(),
                params.len()
            ),
        });
    }
    for (index, (actual, expected)) in method.parameter_types().zip(params.iter()).enumerate() {
        if actual.id() != expected.id() {
            return Err(IntrospectError::SignatureMismatch {
                method: method.name().to_string(),
                detail: format!(
                    "parameter {} has type {}, expected {}",
                    index,
                    actual.qualified_name(),
                    expected.qualified_name()
                ),
            });
        }
    }
    Ok(())
}
