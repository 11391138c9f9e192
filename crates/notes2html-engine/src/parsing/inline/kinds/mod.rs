pub mod strong;

pub use strong::Strong;
