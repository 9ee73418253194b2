//! ClassMap / PackageMap resolution tests.

use reflekt::{ClassDecl, ClassMap, PackageMap, TypeRegistry};
use rstest::rstest;

/// Number/Integer/Double hierarchy plus a List/ArrayList interface pair.
fn numbers_registry() -> TypeRegistry {
    let mut reg = TypeRegistry::new();
    let object = reg.object_type().id();
    let number = reg
        .declare(ClassDecl::new("lang.Number").public().abstract_().extends(object))
        .unwrap();
    reg.declare(ClassDecl::new("lang.Integer").public().final_().extends(number))
        .unwrap();
    reg.declare(ClassDecl::new("lang.Double").public().final_().extends(number))
        .unwrap();
    let collection = reg
        .declare(ClassDecl::interface("coll.Collection").public())
        .unwrap();
    let list = reg
        .declare(ClassDecl::interface("coll.List").public().implements(collection))
        .unwrap();
    reg.declare(
        ClassDecl::new("coll.ArrayList")
            .public()
            .extends(object)
            .implements(list),
    )
    .unwrap();
    reg
}

#[test]
fn exact_hit_beats_the_hierarchy() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    map.insert(reg.find("lang.Number").unwrap(), "Number");
    map.insert(reg.find("lang.Integer").unwrap(), "Integer");

    assert_eq!(map.get(reg.find("lang.Integer").unwrap()), Some(&"Integer"));
}

#[test]
fn superclass_match_beats_no_match() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    map.insert(reg.find("lang.Number").unwrap(), "Number");
    map.insert(reg.object_type(), "Object");

    // Integer has no entry; Number is the nearest registered superclass.
    assert_eq!(map.get(reg.find("lang.Integer").unwrap()), Some(&"Number"));
    // Number itself resolves exactly.
    assert_eq!(map.get(reg.find("lang.Number").unwrap()), Some(&"Number"));
    // A class with only Object above it falls back to Object.
    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), Some(&"Object"));
}

#[test]
fn interface_match_resolves_for_implementors() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    map.insert(reg.find("coll.List").unwrap(), "List");

    // ArrayList is unregistered; its directly declared List interface
    // carries the value.
    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), Some(&"List"));
}

#[test]
fn interface_check_precedes_the_superclass() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    map.insert(reg.object_type(), "Object");
    map.insert(reg.find("coll.List").unwrap(), "List");

    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), Some(&"List"));
}

#[test]
fn exclude_interfaces_skips_the_interface_check() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    map.set_exclude_interfaces(true);
    map.insert(reg.find("coll.List").unwrap(), "List");

    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), None);

    map.insert(reg.object_type(), "Object");
    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), Some(&"Object"));
}

#[test]
fn indirect_interfaces_are_not_walked() {
    let reg = numbers_registry();
    let mut map = ClassMap::new();
    // Collection is only reachable through List; the interface check
    // inspects directly declared interfaces only.
    map.insert(reg.find("coll.Collection").unwrap(), "Collection");

    assert_eq!(map.get(reg.find("coll.ArrayList").unwrap()), None);
}

#[test]
fn unresolvable_class_yields_none() {
    let reg = numbers_registry();
    let map: ClassMap<&str> = ClassMap::new();
    assert_eq!(map.get(reg.find("lang.Double").unwrap()), None);
}

fn sample_package_map() -> PackageMap<&'static str> {
    let mut map = PackageMap::new();
    map.insert("javax", "javax");
    map.insert("javax.xml", "xml");
    map.insert("javax.xml.bind", "bind");
    map
}

#[rstest]
#[case("javax.xml.bind.annotation.adapters", Some("bind"))]
#[case("javax.xml.bind", Some("bind"))]
#[case("javax.xml.transform", Some("xml"))]
#[case("javax.swing", Some("javax"))]
#[case("javax", Some("javax"))]
#[case("java.util", None)]
fn longest_registered_prefix_wins(#[case] package: &str, #[case] expected: Option<&str>) {
    let map = sample_package_map();
    assert_eq!(map.get(package).copied(), expected);
}

#[test]
fn package_lookup_by_class_uses_its_package() {
    let mut reg = TypeRegistry::new();
    let id = reg
        .declare(ClassDecl::new("javax.xml.bind.annotation.adapters.XmlAdapter").public())
        .unwrap();
    let map = sample_package_map();
    assert_eq!(map.get_for_class(reg.class(id)), Some(&"bind"));
}
