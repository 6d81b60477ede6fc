pub mod constants;
pub mod markup;
pub mod render;
