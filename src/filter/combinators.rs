//! Boolean combinators, generic over the filter kind.

use super::{ClassFilter, ConstructorFilter, FieldFilter, MethodFilter};
use crate::meta::{Class, Constructor, Field, Method};

/// Conjunction over a list of filters.
///
/// An empty list is vacuously true: an empty composite matches every
/// member.
pub struct And<F: ?Sized> {
    filters: Vec<Box<F>>,
}

impl<F: ?Sized> And<F> {
    pub fn new(filters: Vec<Box<F>>) -> Self {
        Self { filters }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Disjunction over a list of filters.
///
/// N-ary: a binary OR is the two-element case.
pub struct Or<F: ?Sized> {
    filters: Vec<Box<F>>,
}

impl<F: ?Sized> Or<F> {
    pub fn new(filters: Vec<Box<F>>) -> Self {
        Self { filters }
    }

    pub fn pair(left: Box<F>, right: Box<F>) -> Self {
        Self {
            filters: vec![left, right],
        }
    }
}

/// Negation of a single filter.
pub struct Not<F: ?Sized> {
    inner: Box<F>,
}

impl<F: ?Sized> Not<F> {
    pub fn new(inner: Box<F>) -> Self {
        Self { inner }
    }
}

macro_rules! impl_combinators {
    ($filter:ident, $item:ty) => {
        impl $filter for And<dyn $filter> {
            fn accepts(&self, item: $item) -> bool {
                self.filters.iter().all(|f| f.accepts(item))
            }

            fn describe(&self) -> String {
                self.filters
                    .iter()
                    .map(|f| f.describe())
                    .collect::<Vec<_>>()
                    .join(" and ")
            }
        }

        impl $filter for Or<dyn $filter> {
            fn accepts(&self, item: $item) -> bool {
                self.filters.iter().any(|f| f.accepts(item))
            }

            fn describe(&self) -> String {
                self.filters
                    .iter()
                    .map(|f| f.describe())
                    .collect::<Vec<_>>()
                    .join(" or ")
            }
        }

        impl $filter for Not<dyn $filter> {
            fn accepts(&self, item: $item) -> bool {
                !self.inner.accepts(item)
            }

            fn describe(&self) -> String {
                format!("not {}", self.inner.describe())
            }
        }
    };
}

impl_combinators!(ClassFilter, Class<'_>);
impl_combinators!(MethodFilter, Method<'_>);
impl_combinators!(FieldFilter, Field<'_>);
impl_combinators!(ConstructorFilter, Constructor<'_>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::TypeRegistry;

    struct Always(bool);

    impl ClassFilter for Always {
        fn accepts(&self, _class: Class<'_>) -> bool {
            self.0
        }

        fn describe(&self) -> String {
            format!("always {}", self.0)
        }
    }

    fn boxed(result: bool) -> Box<dyn ClassFilter> {
        Box::new(Always(result))
    }

    #[test]
    fn empty_and_is_vacuously_true() {
        let reg = TypeRegistry::new();
        let and = And::<dyn ClassFilter>::new(Vec::new());
        assert!(and.accepts(reg.object_type()));
    }

    #[test]
    fn and_requires_every_operand() {
        let reg = TypeRegistry::new();
        let class = reg.object_type();
        assert!(And::<dyn ClassFilter>::new(vec![boxed(true), boxed(true)]).accepts(class));
        assert!(!And::<dyn ClassFilter>::new(vec![boxed(true), boxed(false)]).accepts(class));
    }

    #[test]
    fn or_truth_table() {
        let reg = TypeRegistry::new();
        let class = reg.object_type();
        for (left, right, expected) in [
            (false, false, false),
            (false, true, true),
            (true, false, true),
            (true, true, true),
        ] {
            let or = Or::<dyn ClassFilter>::pair(boxed(left), boxed(right));
            assert_eq!(or.accepts(class), expected, "{left} or {right}");
        }
    }

    #[test]
    fn nary_or_matches_any_operand() {
        let reg = TypeRegistry::new();
        let or = Or::<dyn ClassFilter>::new(vec![boxed(false), boxed(false), boxed(true)]);
        assert!(or.accepts(reg.object_type()));
    }

    #[test]
    fn not_complements() {
        let reg = TypeRegistry::new();
        let class = reg.object_type();
        assert!(!Not::<dyn ClassFilter>::new(boxed(true)).accepts(class));
        assert!(Not::<dyn ClassFilter>::new(boxed(false)).accepts(class));
    }

    #[test]
    fn describe_joins_operands() {
        let and = And::<dyn ClassFilter>::new(vec![boxed(true), boxed(false)]);
        assert_eq!(and.describe(), "always true and always false");
        let or = Or::<dyn ClassFilter>::pair(boxed(true), boxed(false));
        assert_eq!(or.describe(), "always true or always false");
        let not = Not::<dyn ClassFilter>::new(boxed(true));
        assert_eq!(not.describe(), "not always true");
    }
}
