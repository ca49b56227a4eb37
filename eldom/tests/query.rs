use eldom::{collect_by_class, find_by_class, find_by_class_mut, Element};

fn fixture() -> Element {
    Element::box_()
        .id("container")
        .class("tk-toggle")
        .child(Element::box_().id("icon").class("tk-toggle-icon"))
        .child(Element::text("Accept terms").id("label").class("tk-toggle-text"))
}

#[test]
fn test_find_by_class_descends() {
    let root = fixture();
    let label = find_by_class(&root, "tk-toggle-text").unwrap();
    assert_eq!(label.id, "label");
}

#[test]
fn test_find_by_class_considers_scope_itself() {
    let root = fixture();
    let hit = find_by_class(&root, "tk-toggle").unwrap();
    assert_eq!(hit.id, "container");
}

#[test]
fn test_find_by_class_first_match_in_document_order() {
    let root = Element::box_()
        .child(Element::box_().id("first").class("dup"))
        .child(Element::box_().id("second").class("dup"));
    assert_eq!(find_by_class(&root, "dup").unwrap().id, "first");
}

#[test]
fn test_find_by_class_missing() {
    let root = fixture();
    assert!(find_by_class(&root, "tk-toggle-missing").is_none());
}

#[test]
fn test_find_by_class_mut_allows_mutation() {
    let mut root = fixture();
    let label = find_by_class_mut(&mut root, "tk-toggle-text").unwrap();
    label.set_text("Updated");
    let label = find_by_class(&root, "tk-toggle-text").unwrap();
    assert_eq!(label.content.as_text(), Some("Updated"));
}

#[test]
fn test_collect_by_class() {
    let root = Element::box_()
        .child(Element::box_().class("dup"))
        .child(Element::box_().child(Element::box_().class("dup")));
    assert_eq!(collect_by_class(&root, "dup").len(), 2);
    assert!(collect_by_class(&root, "none").is_empty());
}
