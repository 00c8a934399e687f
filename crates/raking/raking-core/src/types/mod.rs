pub mod collections;
pub mod dimension;
pub mod record;
pub mod target;
pub mod wire;
