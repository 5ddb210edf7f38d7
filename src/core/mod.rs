pub mod suggest;
pub mod value;
