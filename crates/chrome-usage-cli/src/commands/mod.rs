pub mod completion;
pub mod scan;
