pub(crate) mod artifact;
pub(crate) mod backend;
pub(crate) mod bitmap;
pub(crate) mod markup;
pub(crate) mod noise;
