//! Introspector tests: declared vs transitive walks, deterministic
//! ordering, named lookups, constructor guards, and annotation queries.

mod helpers;

use helpers::fixtures::fixture;
use reflekt::{
    ClassFilterBuilder, ClassIntrospector, ConstructorFilterBuilder, FieldFilterBuilder,
    IntrospectError, MethodFilterBuilder, find_class_of_type, introspect,
};

// ============================================================================
// Transitive vs declared walks
// ============================================================================

#[test]
fn transitive_fields_include_superclass_declarations() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let filter = FieldFilterBuilder::new().name("superField").build().unwrap();

    // Subclass declares name and age (fail the filter); the base class
    // declares superField (passes).
    let fields = introspector.fields(filter.as_ref());
    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["superField"]);

    assert!(introspector.declared_fields(filter.as_ref()).is_empty());
}

#[test]
fn transitive_methods_union_all_levels() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let getters = MethodFilterBuilder::getters();

    let methods = introspector.methods(getters.as_ref());
    let names: Vec<&str> = methods.iter().map(|m| m.name()).collect();
    // Most-derived first: subclass declarations, then the base class's.
    assert_eq!(names, ["getName", "getAge", "getId", "getName"]);

    let declared = introspector.declared_methods(getters.as_ref());
    let names: Vec<&str> = declared.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["getName", "getAge"]);
}

#[test]
fn singular_method_lookup_prefers_the_most_derived_declaration() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let filter = MethodFilterBuilder::new().name("getName").build().unwrap();

    let method = introspector.method(filter.as_ref()).unwrap();
    assert_eq!(method.name(), "getName");
    assert_eq!(method.declaring_class().qualified_name(), "store.CachedRecord");
}

#[test]
fn singular_method_lookup_misses_as_none() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let filter = MethodFilterBuilder::new().name("missing").build().unwrap();
    assert!(introspector.method(filter.as_ref()).is_none());
}

#[test]
fn interfaces_walk_collects_every_level() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let any = ClassFilterBuilder::new().is_interface().build().unwrap();

    let interfaces = introspector.interfaces(any.as_ref());
    let names: Vec<&str> = interfaces.iter().map(|i| i.qualified_name()).collect();
    // The subclass level first, then the interfaces of the base class.
    assert_eq!(names, ["store.Closeable", "store.Listener"]);

    let declared = introspector.declared_interfaces(any.as_ref());
    let names: Vec<&str> = declared.iter().map(|i| i.qualified_name()).collect();
    assert_eq!(names, ["store.Closeable"]);

    let first = introspector.interface(any.as_ref()).unwrap();
    assert_eq!(first.qualified_name(), "store.Closeable");
}

#[test]
fn interfaces_filtered_by_name() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let listener_only = ClassFilterBuilder::new().name(".*Listener").build().unwrap();
    let interfaces = introspector.interfaces(listener_only.as_ref());
    assert_eq!(interfaces.len(), 1);
    assert_eq!(interfaces[0].qualified_name(), "store.Listener");
}

// ============================================================================
// Named lookups
// ============================================================================

#[test]
fn declared_method_by_name_and_signature() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let string = fx.reg.string_type();

    let method = introspector.declared_method("setName", &[string]).unwrap();
    assert_eq!(method.name(), "setName");

    // Declared-only: getId lives on the base class.
    assert!(matches!(
        introspector.declared_method("getId", &[]),
        Err(IntrospectError::MethodNotFound { .. })
    ));
}

#[test]
fn named_method_lookup_walks_the_hierarchy() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));

    let method = introspector.method_named("getId", &[]).unwrap();
    assert_eq!(method.declaring_class().qualified_name(), "store.Record");

    assert!(matches!(
        introspector.method_named("refresh", &[]),
        // refresh is protected; the transitive named lookup is public-only.
        Err(IntrospectError::MethodNotFound { .. })
    ));
}

// ============================================================================
// Constructors
// ============================================================================

#[test]
fn constructor_lookup_is_declared_only_and_type_guarded() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let all = ConstructorFilterBuilder::new()
        .is_public()
        .or()
        .is_private()
        .build()
        .unwrap();

    let constructors = introspector
        .constructors(all.as_ref(), fx.reg.class(fx.cached))
        .unwrap();
    assert_eq!(constructors.len(), 2);

    // Requesting the supertype's constructors through a subclass
    // introspector is a configuration error.
    assert!(matches!(
        introspector.constructors(all.as_ref(), fx.reg.class(fx.record)),
        Err(IntrospectError::TypeMismatch { .. })
    ));
}

#[test]
fn first_constructor_requires_a_match() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));

    let private = ConstructorFilterBuilder::new().is_private().build().unwrap();
    let found = introspector
        .first_constructor(private.as_ref(), fx.reg.class(fx.cached))
        .unwrap();
    assert_eq!(found.parameter_count(), 1);

    let protected = ConstructorFilterBuilder::new().is_protected().build().unwrap();
    assert!(matches!(
        introspector.first_constructor(protected.as_ref(), fx.reg.class(fx.cached)),
        Err(IntrospectError::ConstructorNotFound { .. })
    ));
}

// ============================================================================
// Annotations across the hierarchy
// ============================================================================

#[test]
fn annotation_presence_walks_superclasses() {
    let fx = fixture();
    let indexed = fx.reg.class(fx.indexed);
    let tagged = fx.reg.class(fx.tagged);

    // @Indexed sits on Record; CachedRecord inherits visibility of it.
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    assert!(introspector.is_annotation_present(indexed));
    assert!(!introspector.is_annotation_present(tagged));
    assert!(introspector.is_any_annotation_present(&[tagged, indexed]));

    let instance = introspector.annotation(indexed).unwrap();
    assert_eq!(instance.annotation_type_id(), fx.indexed);

    // The declared-only check on the subclass itself misses.
    assert!(!fx.reg.class(fx.cached).is_annotation_present(indexed));
}

#[test]
fn annotated_methods_batch_lookup() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let indexed = fx.reg.class(fx.indexed);
    let tagged = fx.reg.class(fx.tagged);

    let by_annotation = introspector.annotated_methods(None, &[indexed, tagged]);
    let indexed_names: Vec<&str> = by_annotation[&indexed].iter().map(|m| m.name()).collect();
    // getAge on the subclass first, then getId on the base class.
    assert_eq!(indexed_names, ["getAge", "getId"]);
    let tagged_names: Vec<&str> = by_annotation[&tagged].iter().map(|m| m.name()).collect();
    assert_eq!(tagged_names, ["refresh"]);
}

#[test]
fn annotated_methods_intersect_with_a_caller_filter() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let indexed = fx.reg.class(fx.indexed);
    let zero_params = MethodFilterBuilder::new().name("getAge").build().unwrap();

    let by_annotation = introspector.annotated_methods(Some(zero_params.as_ref()), &[indexed]);
    let names: Vec<&str> = by_annotation[&indexed].iter().map(|m| m.name()).collect();
    assert_eq!(names, ["getAge"]);
}

// ============================================================================
// Class resolution and signature verification
// ============================================================================

#[test]
fn find_class_of_type_validates_name_and_base() {
    let fx = fixture();
    let record = fx.reg.class(fx.record);

    let found = find_class_of_type(&fx.reg, "store.CachedRecord", record).unwrap();
    assert_eq!(found.qualified_name(), "store.CachedRecord");

    assert!(matches!(
        find_class_of_type(&fx.reg, "store.Missing", record),
        Err(IntrospectError::ClassNotFound(_))
    ));
    assert!(matches!(
        find_class_of_type(&fx.reg, "store.Listener", record),
        Err(IntrospectError::NotAssignable { .. })
    ));
}

#[test]
fn verify_method_signature_reports_the_first_mismatch() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let string = fx.reg.string_type();
    let void = fx.reg.void_type();
    let int = fx.reg.primitive(reflekt::Primitive::Int);

    let set_name = introspector.declared_method("setName", &[string]).unwrap();
    assert!(introspect::verify_method_signature(set_name, void, &[string]).is_ok());
    assert!(matches!(
        introspect::verify_method_signature(set_name, int, &[string]),
        Err(IntrospectError::SignatureMismatch { .. })
    ));
    assert!(matches!(
        introspect::verify_method_signature(set_name, void, &[]),
        Err(IntrospectError::SignatureMismatch { .. })
    ));
    assert!(matches!(
        introspect::verify_method_signature(set_name, void, &[int]),
        Err(IntrospectError::SignatureMismatch { .. })
    ));
}

#[test]
fn annotated_parameter_index_finds_the_first_match() {
    use reflekt::{AnnotationInstance, ClassDecl, MethodDecl};

    let mut reg = reflekt::TypeRegistry::new();
    let string = reg.string_type().id();
    let void = reg.void_type().id();
    let id_annotation = reg
        .declare(ClassDecl::annotation("api.Key").public())
        .unwrap();
    let key_on_param = AnnotationInstance::new(reg.class(id_annotation));
    let owner = reg
        .declare(
            ClassDecl::new("api.Repository").public().method(
                MethodDecl::new("store", void)
                    .public()
                    .param(string)
                    .annotated_param(string, [key_on_param]),
            ),
        )
        .unwrap();

    let key = reg.class(id_annotation);
    let store = ClassIntrospector::new(reg.class(owner))
        .declared_method("store", &[reg.string_type(), reg.string_type()])
        .unwrap();
    assert_eq!(store.annotated_parameter_index(key), Some(1));
    assert!(store.parameter_annotations(0).is_empty());
    assert_eq!(store.parameter_annotations(1).len(), 1);
}

#[test]
fn void_return_and_parameter_metadata() {
    let fx = fixture();
    let introspector = ClassIntrospector::new(fx.reg.class(fx.cached));
    let string = fx.reg.string_type();

    let set_name = introspector.declared_method("setName", &[string]).unwrap();
    assert!(set_name.has_void_return());
    assert_eq!(set_name.parameter_count(), 1);
    assert_eq!(set_name.parameter_type(0).unwrap(), string);
    assert!(set_name.parameter_type(1).is_none());

    let get_age = introspector.declared_method("getAge", &[]).unwrap();
    assert!(!get_age.has_void_return());
}
