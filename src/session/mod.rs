pub(crate) mod design_session;
pub(crate) mod fingerprint;
pub(crate) mod slot;
