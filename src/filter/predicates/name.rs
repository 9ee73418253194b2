use regex::Regex;

use crate::filter::{ClassFilter, FieldFilter, MethodFilter};
use crate::meta::{Class, Field, Method};

/// Matches members whose name matches a regular expression.
///
/// The pattern is anchored to the full name. Classes are matched on their
/// qualified name, methods and fields on their simple name.
pub struct NameFilter {
    pattern: Regex,
    source: String,
}

impl NameFilter {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            pattern: anchored,
            source: pattern.to_string(),
        })
    }

    fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

impl ClassFilter for NameFilter {
    fn accepts(&self, class: Class<'_>) -> bool {
        self.matches(class.qualified_name())
    }

    fn describe(&self) -> String {
        format!("name matches regular expression {}", self.source)
    }
}

impl MethodFilter for NameFilter {
    fn accepts(&self, method: Method<'_>) -> bool {
        self.matches(method.name())
    }

    fn describe(&self) -> String {
        format!("name matches regular expression {}", self.source)
    }
}

impl FieldFilter for NameFilter {
    fn accepts(&self, field: Field<'_>) -> bool {
        self.matches(field.name())
    }

    fn describe(&self) -> String {
        format!("name matches regular expression {}", self.source)
    }
}
