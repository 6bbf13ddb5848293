pub(crate) mod catalog;
pub(crate) mod decode;
pub(crate) mod raster;
pub(crate) mod store;
