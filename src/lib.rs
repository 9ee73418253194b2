//! # reflekt-base
//!
//! Core library for type-metadata modeling, composable member filters,
//! hierarchy-aware member lookup, and annotation synthesis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! synth      → annotation synthesis (validated attribute maps)
//!   ↓
//! introspect → resolution walks, ClassIntrospector facade
//!   ↓
//! collection → ClassMap / PackageMap value resolution
//!   ↓
//! filter     → predicate primitives, combinators, expression builders
//!   ↓
//! meta       → type registry, class/member descriptors, view handles
//! ```
//!
//! The metadata model is explicit: a [`TypeRegistry`] is populated by the
//! host (by hand, or from a generated or scanned index) and queried
//! through borrowed [`Class`], [`Method`], [`Field`] and [`Constructor`]
//! handles. Filters are built fluently, AND by default with explicit
//! OR/NOT operators:
//!
//! ```
//! use reflekt::{ClassDecl, ClassIntrospector, MethodDecl, MethodFilterBuilder, TypeRegistry};
//!
//! let mut reg = TypeRegistry::new();
//! let string = reg.string_type().id();
//! let widget = reg.declare(
//!     ClassDecl::new("ui.Widget")
//!         .public()
//!         .method(MethodDecl::new("getTitle", string).public()),
//! )?;
//!
//! let getters = MethodFilterBuilder::new()
//!     .is_public()
//!     .name("get[A-Z]\\w*")
//!     .not()
//!     .returns_void()
//!     .number_of_parameters(0)
//!     .build()?;
//!
//! let found = ClassIntrospector::new(reg.class(widget)).methods(getters.as_ref());
//! assert_eq!(found.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// ============================================================================
// MODULES (dependency order: meta → filter → collection → introspect → synth)
// ============================================================================

/// Type registry, class/member descriptors, view handles
pub mod meta;

/// Predicate primitives, combinators, expression builders
pub mod filter;

/// ClassMap / PackageMap value resolution
pub mod collection;

/// Resolution walks and the ClassIntrospector facade
pub mod introspect;

/// Annotation synthesis from validated attribute maps
pub mod synth;

// Re-export the primary API surface
pub use collection::{ClassMap, PackageMap};
pub use filter::builder::{
    ClassFilterBuilder, ConstructorFilterBuilder, FieldFilterBuilder, FilterBuildError,
    MethodFilterBuilder,
};
pub use filter::{
    BoxedClassFilter, BoxedConstructorFilter, BoxedFieldFilter, BoxedMethodFilter, ClassFilter,
    ConstructorFilter, FieldFilter, MethodFilter,
};
pub use introspect::{ClassIntrospector, IntrospectError, find_class_of_type};
pub use meta::{
    AnnotationInstance, AttrValue, Class, ClassDecl, ClassFlags, ClassKind, Constructor,
    ConstructorDecl, Field, FieldDecl, MetaError, Method, MethodDecl, Modifiers, Primitive,
    TypeId, TypeRegistry,
};
pub use synth::{AnnotationBuilder, AnnotationError};
