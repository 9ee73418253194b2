//! Shared registry fixture: a small store-keeping type universe with a
//! two-level class hierarchy, interfaces on both levels, and annotated
//! members.

use reflekt::{
    AnnotationInstance, ClassDecl, ConstructorDecl, FieldDecl, MethodDecl, Primitive, TypeId,
    TypeRegistry,
};

pub struct Fixture {
    pub reg: TypeRegistry,
    /// Interface implemented by `Record`.
    pub listener: TypeId,
    /// Interface implemented by `CachedRecord`.
    pub closeable: TypeId,
    /// Marker annotation used on classes and methods.
    pub indexed: TypeId,
    /// Meta-annotation placed on `Tagged`.
    pub meta: TypeId,
    /// Annotation type annotated with `@Meta`.
    pub tagged: TypeId,
    /// Annotation type with a mandatory `value` and a defaulted `priority`.
    pub named: TypeId,
    /// Base class: implements `Listener`, declares `superField`, `getId`,
    /// `getName`.
    pub record: TypeId,
    /// Subclass of `Record`: implements `Closeable`, overrides `getName`,
    /// adds `setName`, `getAge`, `refresh` and two constructors.
    pub cached: TypeId,
}

pub fn fixture() -> Fixture {
    let mut reg = TypeRegistry::new();
    let object = reg.object_type().id();
    let string = reg.string_type().id();
    let int = reg.primitive(Primitive::Int).id();
    let void = reg.void_type().id();

    let listener = reg
        .declare(ClassDecl::interface("store.Listener").public())
        .unwrap();
    let closeable = reg
        .declare(ClassDecl::interface("store.Closeable").public())
        .unwrap();
    let meta = reg
        .declare(ClassDecl::annotation("store.Meta").public())
        .unwrap();
    let indexed = reg
        .declare(ClassDecl::annotation("store.Indexed").public())
        .unwrap();

    let meta_instance = AnnotationInstance::new(reg.class(meta));
    let tagged = reg
        .declare(
            ClassDecl::annotation("store.Tagged")
                .public()
                .annotate(meta_instance),
        )
        .unwrap();

    let named = reg
        .declare(
            ClassDecl::annotation("store.Named")
                .public()
                .method(MethodDecl::new("value", string).public())
                .method(MethodDecl::new("priority", int).public().default_value(5)),
        )
        .unwrap();

    let indexed_on_record = AnnotationInstance::new(reg.class(indexed));
    let indexed_on_get_id = AnnotationInstance::new(reg.class(indexed));
    let record = reg
        .declare(
            ClassDecl::new("store.Record")
                .public()
                .extends(object)
                .implements(listener)
                .annotate(indexed_on_record)
                .field(FieldDecl::new("superField", string).protected())
                .method(MethodDecl::new("getId", int).public().annotate(indexed_on_get_id))
                .method(MethodDecl::new("getName", string).public())
                .constructor(ConstructorDecl::new().public()),
        )
        .unwrap();

    let indexed_on_get_age = AnnotationInstance::new(reg.class(indexed));
    let tagged_on_refresh = AnnotationInstance::new(reg.class(tagged));
    let cached = reg
        .declare(
            ClassDecl::new("store.CachedRecord")
                .public()
                .extends(record)
                .implements(closeable)
                .field(FieldDecl::new("name", string).private())
                .field(FieldDecl::new("age", int).private())
                .method(MethodDecl::new("getName", string).public())
                .method(
                    MethodDecl::new("setName", void)
                        .public()
                        .param(string),
                )
                .method(MethodDecl::new("getAge", int).public().annotate(indexed_on_get_age))
                .method(
                    MethodDecl::new("refresh", void)
                        .protected()
                        .annotate(tagged_on_refresh),
                )
                .constructor(ConstructorDecl::new().public())
                .constructor(ConstructorDecl::new().private().param(string)),
        )
        .unwrap();

    Fixture {
        reg,
        listener,
        closeable,
        indexed,
        meta,
        tagged,
        named,
        record,
        cached,
    }
}
