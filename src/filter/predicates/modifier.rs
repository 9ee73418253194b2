use crate::filter::{ClassFilter, ConstructorFilter, FieldFilter, MethodFilter};
use crate::meta::{Class, Constructor, Field, Method, Modifiers};

/// Matches members carrying any of the modifiers in a mask.
pub struct ModifierFilter {
    mask: Modifiers,
}

impl ModifierFilter {
    pub fn new(mask: Modifiers) -> Self {
        Self { mask }
    }

    fn matches(&self, modifiers: Modifiers) -> bool {
        modifiers.intersects(self.mask)
    }

    fn text(&self) -> String {
        format!("is {}", self.mask)
    }
}

impl ClassFilter for ModifierFilter {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class.modifiers())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl MethodFilter for ModifierFilter {
    fn accepts(&self, method: Method<'_>) -> bool {
        self.matches(method.modifiers())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl FieldFilter for ModifierFilter {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.modifiers())
    }

    fn describe(&self) -> String {
        self.text()
    }
}

impl ConstructorFilter for ModifierFilter {
    fn accepts(&self, constructor: Constructor<'_>) -> bool {
        self.matches(constructor.modifiers())
    }

    fn describe(&self) -> String {
        self.text()
    }
}
