pub(crate) mod design;
pub(crate) mod model;
