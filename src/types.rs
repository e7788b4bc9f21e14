/// Agent identifier.
pub type Agent = usize;
/// Object identifier.
pub type Object = usize;
