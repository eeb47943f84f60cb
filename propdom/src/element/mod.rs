mod content;
mod node;

pub use content::{Content, Tag};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element (in tree order, root included) matching a predicate.
pub fn find_first<'a>(root: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(root) {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_first(child, pred) {
            return Some(found);
        }
    }

    None
}

/// Walk the ancestors of `id`, closest first. Empty if `id` is the root or absent.
pub fn ancestors<'a>(root: &'a Element, id: &str) -> Vec<&'a Element> {
    let mut path = Vec::new();
    if path_to(root, id, &mut path) {
        path.pop();
        path.reverse();
        path
    } else {
        Vec::new()
    }
}

fn path_to<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }
    for child in element.content.children() {
        if path_to(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}
