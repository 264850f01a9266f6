pub(crate) mod constants;
pub(crate) mod inference;
pub(crate) mod stages;
