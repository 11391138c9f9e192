pub mod code_block;
pub mod image;

pub use code_block::CodeBlock;
pub use image::ImageRef;
