/// The external object an entry reads from and writes to, typically a
/// diagram element.
///
/// Entries only care about identity: when the id of the bound subject
/// changes between renders, per-subject state (list ordering, open flag) is
/// derived again from scratch.
pub trait Subject {
    fn subject_id(&self) -> &str;
}

impl Subject for String {
    fn subject_id(&self) -> &str {
        self
    }
}
