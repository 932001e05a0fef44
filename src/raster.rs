pub(crate) mod buffer;
pub(crate) mod engine;
pub(crate) mod source;
