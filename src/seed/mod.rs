pub(crate) mod daily;
pub(crate) mod sequence;
