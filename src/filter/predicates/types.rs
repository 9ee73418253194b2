use crate::filter::{BoxedClassFilter, ClassFilter, FieldFilter};
use crate::meta::{Class, Field, TypeId};

/// Matches classes (or field types) that extend or implement a given type:
/// every match can be treated as a value of that type.
pub struct AssignableFrom {
    target: TypeId,
    name: String,
}

impl AssignableFrom {
    pub fn new(target: Class<'_>) -> Self {
        Self {
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }

    fn matches(&self, candidate: Class<'_>) -> bool {
        candidate
            .registry()
            .class(self.target)
            .is_assignable_from(candidate)
    }

    fn text(&self) -> String {
        format!("extends {}", self.name)
    }
}

impl ClassFilter for AssignableFrom {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class)
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl FieldFilter for AssignableFrom {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.field_type())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

/// Matches classes (or field types) that are base types of a given type.
pub struct AssignableTo {
    target: TypeId,
    name: String,
}

impl AssignableTo {
    pub fn new(target: Class<'_>) -> Self {
        Self {
            target: target.id(),
            name: target.qualified_name().to_string(),
        }
    }

    fn matches(&self, candidate: Class<'_>) -> bool {
        candidate.is_assignable_from(candidate.registry().class(self.target))
    }

    fn text(&self) -> String {
        format!("is a base type of {}", self.name)
    }
}

impl ClassFilter for AssignableTo {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class)
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl FieldFilter for AssignableTo {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.field_type())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

/// Applies a class filter to a class, or to a field's type.
pub struct TypeThroughFilter {
    filter: BoxedClassFilter,
}

impl TypeThroughFilter {
    pub fn new(filter: BoxedClassFilter) -> Self {
        Self { filter }
    }
}

impl ClassFilter for TypeThroughFilter {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.filter.accepts(class)
    }

    fn describe(&self) -> String {
        format!("type matches class filter: {}", self.filter.describe())
    }
}

impl FieldFilter for TypeThroughFilter {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.filter.accepts(field.field_type())
    }

    fn describe(&self) -> String {
        format!("type matches class filter: {}", self.filter.describe())
    }
}
