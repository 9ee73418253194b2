//! Annotation synthesis tests: accessor derivation, validation, defaults,
//! rendering, and value-based equality.

mod helpers;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use helpers::fixtures::fixture;
use reflekt::{
    AnnotationBuilder, AnnotationError, AnnotationInstance, AttrValue, ClassDecl, MethodDecl,
    Primitive, TypeRegistry,
};

fn hash_of(instance: &AnnotationInstance) -> u64 {
    let mut hasher = DefaultHasher::new();
    instance.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Accessor derivation and validation
// ============================================================================

#[test]
fn builder_rejects_non_annotation_types() {
    let fx = fixture();
    assert!(matches!(
        AnnotationBuilder::new(fx.reg.class(fx.record)),
        Err(AnnotationError::NotAnAnnotationType(_))
    ));
}

#[test]
fn unknown_attribute_is_rejected() {
    let fx = fixture();
    let result = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .attr("missing", 1);
    assert!(matches!(
        result,
        Err(AnnotationError::UnknownAttribute { .. })
    ));
}

#[test]
fn mistyped_attribute_is_rejected() {
    let fx = fixture();
    // value is declared as string; an int must not pass.
    let result = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .attr("value", 42);
    assert!(matches!(result, Err(AnnotationError::TypeMismatch { .. })));
}

#[test]
fn primitive_attributes_require_the_exact_primitive() {
    let fx = fixture();
    // priority is an int; a long is not an int.
    let result = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .attr("priority", 7i64);
    assert!(matches!(result, Err(AnnotationError::TypeMismatch { .. })));

    let instance = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .attr("priority", 7)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(instance.value("priority"), Some(&AttrValue::Int(7)));
}

#[test]
fn missing_mandatory_value_fails_at_build() {
    let fx = fixture();
    // value has no default and is never assigned.
    let result = AnnotationBuilder::new(fx.reg.class(fx.named)).unwrap().build();
    assert!(matches!(result, Err(AnnotationError::MissingValue { .. })));
}

#[test]
fn defaults_pre_seed_the_value_map() {
    let fx = fixture();
    let instance = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(instance.value("value"), Some(&AttrValue::Str("cache".into())));
    assert_eq!(instance.value("priority"), Some(&AttrValue::Int(5)));
}

#[test]
fn default_only_annotation_builds_without_assignments() {
    let mut reg = TypeRegistry::new();
    let boolean = reg.primitive(Primitive::Boolean).id();
    let id = reg
        .declare(
            ClassDecl::annotation("api.Cached")
                .public()
                .method(MethodDecl::new("enabled", boolean).public().default_value(true)),
        )
        .unwrap();

    let instance = AnnotationBuilder::new(reg.class(id)).unwrap().build().unwrap();
    assert_eq!(instance.value("enabled"), Some(&AttrValue::Boolean(true)));
}

#[test]
fn reserved_and_parameterized_accessors_are_not_attributes() {
    let mut reg = TypeRegistry::new();
    let string = reg.string_type().id();
    let boolean = reg.primitive(Primitive::Boolean).id();
    let id = reg
        .declare(
            ClassDecl::annotation("api.Odd")
                .public()
                .method(MethodDecl::new("to_string", string).public())
                .method(MethodDecl::new("compare", boolean).public().param(string))
                .method(MethodDecl::new("flag", boolean).public().default_value(false)),
        )
        .unwrap();

    // Only flag qualifies; build succeeds with its default alone.
    let instance = AnnotationBuilder::new(reg.class(id)).unwrap().build().unwrap();
    assert_eq!(instance.value("flag"), Some(&AttrValue::Boolean(false)));
    assert_eq!(instance.value("to_string"), None);
    assert_eq!(instance.value("compare"), None);
}

#[test]
fn scalar_assigned_to_array_attribute_is_wrapped() {
    let mut reg = TypeRegistry::new();
    let string = reg.string_type().id();
    let string_array = reg.array_of(string);
    let id = reg
        .declare(
            ClassDecl::annotation("api.Tags")
                .public()
                .method(MethodDecl::new("value", string_array).public()),
        )
        .unwrap();

    let instance = AnnotationBuilder::new(reg.class(id))
        .unwrap()
        .value("fast")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        instance.value("value"),
        Some(&AttrValue::Array(vec![AttrValue::Str("fast".into())]))
    );
}

#[test]
fn array_attribute_accepts_a_matching_array() {
    let mut reg = TypeRegistry::new();
    let string = reg.string_type().id();
    let string_array = reg.array_of(string);
    let id = reg
        .declare(
            ClassDecl::annotation("api.Tags")
                .public()
                .method(MethodDecl::new("value", string_array).public()),
        )
        .unwrap();

    let instance = AnnotationBuilder::new(reg.class(id))
        .unwrap()
        .value(vec!["fast", "safe"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        instance.value("value"),
        Some(&AttrValue::Array(vec![
            AttrValue::Str("fast".into()),
            AttrValue::Str("safe".into()),
        ]))
    );

    let mismatched = AnnotationBuilder::new(reg.class(id)).unwrap().value(vec![1, 2]);
    assert!(matches!(
        mismatched,
        Err(AnnotationError::TypeMismatch { .. })
    ));
}

#[test]
fn class_and_enum_attribute_values() {
    let mut reg = TypeRegistry::new();
    let class_literal = reg.class_type().id();
    let object = reg.object_type().id();
    let color = reg
        .declare(ClassDecl::enumeration("paint.Color").public().extends(object))
        .unwrap();
    let id = reg
        .declare(
            ClassDecl::annotation("paint.Brush")
                .public()
                .method(MethodDecl::new("target", class_literal).public())
                .method(MethodDecl::new("color", color).public()),
        )
        .unwrap();

    let color_class = reg.find("paint.Color").unwrap();
    let instance = AnnotationBuilder::new(reg.class(id))
        .unwrap()
        .attr("target", color_class)
        .unwrap()
        .attr("color", AttrValue::enum_constant(color_class, "RED"))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        instance.value("target"),
        Some(&AttrValue::type_of(reg.find("paint.Color").unwrap()))
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn marker_annotation_renders_without_parentheses() {
    let fx = fixture();
    let instance = AnnotationBuilder::new(fx.reg.class(fx.indexed))
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(instance.to_string(), "@store.Indexed");
}

#[test]
fn attributes_render_in_declaration_order() {
    let fx = fixture();
    let instance = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        instance.to_string(),
        "@store.Named(value = 'cache', priority = '5')"
    );
}

// ============================================================================
// Equality and hashing
// ============================================================================

#[test]
fn equal_attribute_values_mean_equal_instances() {
    let fx = fixture();
    let build = || {
        AnnotationBuilder::new(fx.reg.class(fx.named))
            .unwrap()
            .value("cache")
            .unwrap()
            .build()
            .unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn synthesized_equals_registry_fed_instance_symmetrically() {
    let fx = fixture();
    let synthesized = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .build()
        .unwrap();
    let fed = AnnotationInstance::new(fx.reg.class(fx.named))
        .with_value("value", "cache")
        .with_value("priority", 5);
    assert_eq!(synthesized, fed);
    assert_eq!(fed, synthesized);
    assert_eq!(hash_of(&synthesized), hash_of(&fed));
}

#[test]
fn differing_values_or_types_are_unequal() {
    let fx = fixture();
    let base = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .build()
        .unwrap();

    let other_value = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("store")
        .unwrap()
        .build()
        .unwrap();
    assert_ne!(base, other_value);

    let other_type = AnnotationBuilder::new(fx.reg.class(fx.indexed))
        .unwrap()
        .build()
        .unwrap();
    assert_ne!(base, other_type);
}

#[test]
fn missing_attribute_on_the_other_side_is_unequal_not_an_error() {
    let fx = fixture();
    let complete = AnnotationBuilder::new(fx.reg.class(fx.named))
        .unwrap()
        .value("cache")
        .unwrap()
        .build()
        .unwrap();
    // A hand-fed instance that never set priority.
    let partial = AnnotationInstance::new(fx.reg.class(fx.named)).with_value("value", "cache");
    assert_ne!(complete, partial);
    assert_ne!(partial, complete);
}

#[test]
fn hash_is_independent_of_attribute_order() {
    let fx = fixture();
    let forward = AnnotationInstance::new(fx.reg.class(fx.named))
        .with_value("value", "cache")
        .with_value("priority", 5);
    let backward = AnnotationInstance::new(fx.reg.class(fx.named))
        .with_value("priority", 5)
        .with_value("value", "cache");
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
}
