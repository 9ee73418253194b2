use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;
use tracing::trace;

use super::annotation::{AnnotationInstance, AttrValue};
use super::member::{ConstructorDef, FieldDef, MethodDef, ParamDef};
use super::modifiers::{ClassFlags, Modifiers};
use super::ty::{Class, ClassDef, ClassKind, TypeId};

/// Errors raised while populating a registry.
#[derive(Debug, Error)]
pub enum MetaError {
    /// A class with the same qualified name is already registered.
    #[error("type '{0}' is already registered")]
    DuplicateType(String),
}

/// The builtin primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Char,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BuiltinTypes {
    primitives: [TypeId; 8],
    void_: TypeId,
    string: TypeId,
    object: TypeId,
    class_literal: TypeId,
}

/// Arena of class metadata, the single source of truth for a modeled type
/// universe.
///
/// A registry is populated once, bottom-up (referenced types are declared
/// before their referrers), and read-only afterwards. A fixed table of
/// builtin types (the primitives plus `void`, `string`, `object` and the
/// `class` literal type) is seeded at construction; nothing is implicitly
/// rooted at `object`.
pub struct TypeRegistry {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<String, TypeId>,
    builtins: BuiltinTypes,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let mut registry = TypeRegistry {
            classes: Vec::new(),
            by_name: FxHashMap::default(),
            builtins: BuiltinTypes {
                primitives: [TypeId::new(0); 8],
                void_: TypeId::new(0),
                string: TypeId::new(0),
                object: TypeId::new(0),
                class_literal: TypeId::new(0),
            },
        };
        let mut primitives = [TypeId::new(0); 8];
        for (i, primitive) in Primitive::ALL.iter().enumerate() {
            primitives[i] = registry.push_builtin(primitive.name(), ClassKind::Primitive);
        }
        let void_ = registry.push_builtin("void", ClassKind::Primitive);
        let object = registry.push_builtin("object", ClassKind::Class);
        let string = registry.push_builtin("string", ClassKind::Class);
        let class_literal = registry.push_builtin("class", ClassKind::Class);
        registry.builtins = BuiltinTypes {
            primitives,
            void_,
            string,
            object,
            class_literal,
        };
        registry
    }

    fn push_builtin(&mut self, name: &str, kind: ClassKind) -> TypeId {
        let id = TypeId::new(self.classes.len());
        self.classes.push(ClassDef {
            name: SmolStr::new(name),
            qualified_name: name.to_string(),
            kind,
            modifiers: Modifiers::PUBLIC | Modifiers::FINAL,
            flags: ClassFlags::empty(),
            superclass: None,
            interfaces: Vec::new(),
            component: None,
            annotations: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub(crate) fn def(&self, id: TypeId) -> &ClassDef {
        &self.classes[id.index()]
    }

    /// Registers a class declaration, failing on a duplicate qualified name.
    pub fn declare(&mut self, decl: ClassDecl) -> Result<TypeId, MetaError> {
        if self.by_name.contains_key(&decl.def.qualified_name) {
            return Err(MetaError::DuplicateType(decl.def.qualified_name));
        }
        let id = TypeId::new(self.classes.len());
        trace!(name = %decl.def.qualified_name, ?id, "registering class");
        self.by_name.insert(decl.def.qualified_name.clone(), id);
        self.classes.push(decl.def);
        Ok(id)
    }

    /// Returns the array type with the given component, registering it on
    /// first use. Array types are deduplicated by component.
    pub fn array_of(&mut self, component: TypeId) -> TypeId {
        let qualified_name = format!("{}[]", self.def(component).qualified_name);
        if let Some(id) = self.by_name.get(&qualified_name) {
            return *id;
        }
        let name = SmolStr::new(format!("{}[]", self.def(component).name));
        let id = TypeId::new(self.classes.len());
        self.classes.push(ClassDef {
            name,
            qualified_name: qualified_name.clone(),
            kind: ClassKind::Array,
            modifiers: Modifiers::PUBLIC | Modifiers::FINAL,
            flags: ClassFlags::empty(),
            superclass: Some(self.builtins.object),
            interfaces: Vec::new(),
            component: Some(component),
            annotations: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        });
        self.by_name.insert(qualified_name, id);
        id
    }

    pub fn class(&self, id: TypeId) -> Class<'_> {
        Class::new(self, id)
    }

    /// Looks up a class by qualified name.
    pub fn find(&self, qualified_name: &str) -> Option<Class<'_>> {
        self.by_name
            .get(qualified_name)
            .map(|id| Class::new(self, *id))
    }

    pub fn primitive(&self, primitive: Primitive) -> Class<'_> {
        Class::new(self, self.builtins.primitives[primitive as usize])
    }

    pub fn void_type(&self) -> Class<'_> {
        Class::new(self, self.builtins.void_)
    }

    pub fn string_type(&self) -> Class<'_> {
        Class::new(self, self.builtins.string)
    }

    pub fn object_type(&self) -> Class<'_> {
        Class::new(self, self.builtins.object)
    }

    /// The type of class-literal attribute values.
    pub fn class_type(&self) -> Class<'_> {
        Class::new(self, self.builtins.class_literal)
    }

    /// All registered classes, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = Class<'_>> {
        (0..self.classes.len()).map(|index| Class::new(self, TypeId::new(index)))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent declaration of a class to register.
///
/// Referenced types are passed as [`TypeId`]s, so a declaration never
/// borrows the registry it is destined for.
pub struct ClassDecl {
    def: ClassDef,
}

impl ClassDecl {
    fn with_kind(qualified_name: &str, kind: ClassKind) -> Self {
        let name = match qualified_name.rsplit_once('.') {
            Some((_, simple)) => simple,
            None => qualified_name,
        };
        ClassDecl {
            def: ClassDef {
                name: SmolStr::new(name),
                qualified_name: qualified_name.to_string(),
                kind,
                modifiers: Modifiers::empty(),
                flags: ClassFlags::empty(),
                superclass: None,
                interfaces: Vec::new(),
                component: None,
                annotations: Vec::new(),
                methods: Vec::new(),
                fields: Vec::new(),
                constructors: Vec::new(),
            },
        }
    }

    /// A plain class declaration.
    pub fn new(qualified_name: &str) -> Self {
        Self::with_kind(qualified_name, ClassKind::Class)
    }

    /// An interface declaration.
    pub fn interface(qualified_name: &str) -> Self {
        Self::with_kind(qualified_name, ClassKind::Interface)
    }

    /// An annotation type declaration.
    pub fn annotation(qualified_name: &str) -> Self {
        Self::with_kind(qualified_name, ClassKind::Annotation)
    }

    /// An enum declaration.
    pub fn enumeration(qualified_name: &str) -> Self {
        Self::with_kind(qualified_name, ClassKind::Enum)
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.def.modifiers = modifiers;
        self
    }

    pub fn public(mut self) -> Self {
        self.def.modifiers |= Modifiers::PUBLIC;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.def.modifiers |= Modifiers::ABSTRACT;
        self
    }

    pub fn final_(mut self) -> Self {
        self.def.modifiers |= Modifiers::FINAL;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.def.flags |= ClassFlags::ANONYMOUS;
        self
    }

    pub fn local(mut self) -> Self {
        self.def.flags |= ClassFlags::LOCAL;
        self
    }

    pub fn member(mut self) -> Self {
        self.def.flags |= ClassFlags::MEMBER;
        self
    }

    pub fn synthetic(mut self) -> Self {
        self.def.flags |= ClassFlags::SYNTHETIC;
        self
    }

    pub fn extends(mut self, superclass: TypeId) -> Self {
        self.def.superclass = Some(superclass);
        self
    }

    pub fn implements(mut self, interface: TypeId) -> Self {
        self.def.interfaces.push(interface);
        self
    }

    pub fn annotate(mut self, instance: AnnotationInstance) -> Self {
        self.def.annotations.push(instance);
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.def.methods.push(method.def);
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.def.fields.push(field.def);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.def.constructors.push(constructor.def);
        self
    }
}

/// Fluent declaration of a method on a [`ClassDecl`].
pub struct MethodDecl {
    def: MethodDef,
}

impl MethodDecl {
    pub fn new(name: &str, return_type: TypeId) -> Self {
        MethodDecl {
            def: MethodDef {
                name: SmolStr::new(name),
                modifiers: Modifiers::empty(),
                return_type,
                params: Vec::new(),
                annotations: Vec::new(),
                default_value: None,
            },
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.def.modifiers = modifiers;
        self
    }

    pub fn public(mut self) -> Self {
        self.def.modifiers |= Modifiers::PUBLIC;
        self
    }

    pub fn protected(mut self) -> Self {
        self.def.modifiers |= Modifiers::PROTECTED;
        self
    }

    pub fn private(mut self) -> Self {
        self.def.modifiers |= Modifiers::PRIVATE;
        self
    }

    pub fn static_(mut self) -> Self {
        self.def.modifiers |= Modifiers::STATIC;
        self
    }

    pub fn final_(mut self) -> Self {
        self.def.modifiers |= Modifiers::FINAL;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.def.modifiers |= Modifiers::ABSTRACT;
        self
    }

    pub fn synchronized(mut self) -> Self {
        self.def.modifiers |= Modifiers::SYNCHRONIZED;
        self
    }

    pub fn param(mut self, ty: TypeId) -> Self {
        self.def.params.push(ParamDef {
            ty,
            annotations: Vec::new(),
        });
        self
    }

    pub fn annotated_param(
        mut self,
        ty: TypeId,
        annotations: impl IntoIterator<Item = AnnotationInstance>,
    ) -> Self {
        self.def.params.push(ParamDef {
            ty,
            annotations: annotations.into_iter().collect(),
        });
        self
    }

    pub fn annotate(mut self, instance: AnnotationInstance) -> Self {
        self.def.annotations.push(instance);
        self
    }

    /// Declares a default value; meaningful on annotation accessors only.
    pub fn default_value(mut self, value: impl Into<AttrValue>) -> Self {
        self.def.default_value = Some(value.into());
        self
    }
}

/// Fluent declaration of a field on a [`ClassDecl`].
pub struct FieldDecl {
    def: FieldDef,
}

impl FieldDecl {
    pub fn new(name: &str, ty: TypeId) -> Self {
        FieldDecl {
            def: FieldDef {
                name: SmolStr::new(name),
                ty,
                modifiers: Modifiers::empty(),
                enum_constant: false,
                annotations: Vec::new(),
            },
        }
    }

    /// An enum constant: public static final, flagged as a constant of the
    /// enum type it belongs to.
    pub fn enum_constant(name: &str, enum_type: TypeId) -> Self {
        let mut decl = Self::new(name, enum_type);
        decl.def.modifiers = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;
        decl.def.enum_constant = true;
        decl
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.def.modifiers = modifiers;
        self
    }

    pub fn public(mut self) -> Self {
        self.def.modifiers |= Modifiers::PUBLIC;
        self
    }

    pub fn protected(mut self) -> Self {
        self.def.modifiers |= Modifiers::PROTECTED;
        self
    }

    pub fn private(mut self) -> Self {
        self.def.modifiers |= Modifiers::PRIVATE;
        self
    }

    pub fn static_(mut self) -> Self {
        self.def.modifiers |= Modifiers::STATIC;
        self
    }

    pub fn final_(mut self) -> Self {
        self.def.modifiers |= Modifiers::FINAL;
        self
    }

    pub fn transient(mut self) -> Self {
        self.def.modifiers |= Modifiers::TRANSIENT;
        self
    }

    pub fn volatile(mut self) -> Self {
        self.def.modifiers |= Modifiers::VOLATILE;
        self
    }

    pub fn annotate(mut self, instance: AnnotationInstance) -> Self {
        self.def.annotations.push(instance);
        self
    }
}

/// Fluent declaration of a constructor on a [`ClassDecl`].
pub struct ConstructorDecl {
    def: ConstructorDef,
}

impl ConstructorDecl {
    pub fn new() -> Self {
        ConstructorDecl {
            def: ConstructorDef {
                modifiers: Modifiers::empty(),
                params: Vec::new(),
                annotations: Vec::new(),
            },
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.def.modifiers = modifiers;
        self
    }

    pub fn public(mut self) -> Self {
        self.def.modifiers |= Modifiers::PUBLIC;
        self
    }

    pub fn protected(mut self) -> Self {
        self.def.modifiers |= Modifiers::PROTECTED;
        self
    }

    pub fn private(mut self) -> Self {
        self.def.modifiers |= Modifiers::PRIVATE;
        self
    }

    pub fn param(mut self, ty: TypeId) -> Self {
        self.def.params.push(ParamDef {
            ty,
            annotations: Vec::new(),
        });
        self
    }

    pub fn annotate(mut self, instance: AnnotationInstance) -> Self {
        self.def.annotations.push(instance);
        self
    }
}

impl Default for ConstructorDecl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_seeded() {
        let reg = TypeRegistry::new();
        assert_eq!(reg.primitive(Primitive::Int).qualified_name(), "int");
        assert!(reg.primitive(Primitive::Boolean).is_primitive());
        assert_eq!(reg.void_type().qualified_name(), "void");
        assert!(reg.find("string").is_some());
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let mut reg = TypeRegistry::new();
        reg.declare(ClassDecl::new("a.B")).unwrap();
        assert!(matches!(
            reg.declare(ClassDecl::new("a.B")),
            Err(MetaError::DuplicateType(_))
        ));
    }

    #[test]
    fn array_types_are_deduplicated() {
        let mut reg = TypeRegistry::new();
        let string = reg.string_type().id();
        let a = reg.array_of(string);
        let b = reg.array_of(string);
        assert_eq!(a, b);
        let array = reg.class(a);
        assert!(array.is_array());
        assert_eq!(array.qualified_name(), "string[]");
        assert_eq!(array.array_component().unwrap().id(), string);
    }

    #[test]
    fn simple_name_is_last_segment() {
        let mut reg = TypeRegistry::new();
        let id = reg.declare(ClassDecl::new("com.example.Widget")).unwrap();
        let class = reg.class(id);
        assert_eq!(class.name(), "Widget");
        assert_eq!(class.package_name(), "com.example");
    }
}
