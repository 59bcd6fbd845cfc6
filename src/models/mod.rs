pub mod skip;

pub use skip::Skip;
