pub(crate) mod layout;
pub(crate) mod node;
pub(crate) mod primitives;
pub(crate) mod transform;
