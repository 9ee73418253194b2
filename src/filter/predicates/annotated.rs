use crate::filter::{ClassFilter, ConstructorFilter, FieldFilter, MethodFilter};
use crate::meta::{AnnotationInstance, Class, Constructor, Field, Method, TypeId, TypeRegistry};

/// Matches members carrying an annotation of a given type.
pub struct Annotated {
    annotation: TypeId,
    name: String,
}

impl Annotated {
    pub fn new(annotation: Class<'_>) -> Self {
        Self {
            annotation: annotation.id(),
            name: annotation.qualified_name().to_string(),
        }
    }

    fn matches(&self, annotations: &[AnnotationInstance]) -> bool {
        annotations
            .iter()
            .any(|instance| instance.annotation_type_id() == self.annotation)
    }

    fn text(&self) -> String {
        format!("annotated with @{}", self.name)
    }
}

impl ClassFilter for Annotated {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl MethodFilter for Annotated {
    fn accepts(&self, method: Method<'_>) -> bool {
        self.matches(method.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl FieldFilter for Annotated {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl ConstructorFilter for Annotated {
    fn accepts(&self, constructor: Constructor<'_>) -> bool {
        self.matches(constructor.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

/// Matches members carrying an annotation whose type is itself annotated
/// with a given meta-annotation.
pub struct MetaAnnotated {
    annotation: TypeId,
    name: String,
}

impl MetaAnnotated {
    pub fn new(meta_annotation: Class<'_>) -> Self {
        Self {
            annotation: meta_annotation.id(),
            name: meta_annotation.qualified_name().to_string(),
        }
    }

    fn matches(&self, reg: &TypeRegistry, annotations: &[AnnotationInstance]) -> bool {
        annotations.iter().any(|instance| {
            instance
                .annotation_type(reg)
                .annotations()
                .iter()
                .any(|meta| meta.annotation_type_id() == self.annotation)
        })
    }

    fn text(&self) -> String {
        format!("is meta-annotated with annotation @{}", self.name)
    }
}

impl ClassFilter for MetaAnnotated {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class.registry(), class.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl MethodFilter for MetaAnnotated {
    fn accepts(&self, method: Method<'_>) -> bool {
        self.matches(method.registry(), method.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl FieldFilter for MetaAnnotated {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.registry(), field.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl ConstructorFilter for MetaAnnotated {
    fn accepts(&self, constructor: Constructor<'_>) -> bool {
        self.matches(constructor.registry(), constructor.annotations())
    }

    fn describe(&self) -> String {
        self.text()
    }
}
