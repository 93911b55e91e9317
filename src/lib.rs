pub mod constants;
pub mod path;
pub mod probe;
pub mod proxy;
pub mod version;
