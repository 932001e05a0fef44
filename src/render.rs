pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod freeze;
pub(crate) mod record;
pub(crate) mod walk;
