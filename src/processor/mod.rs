mod core;

#[cfg(test)]
mod test;

pub use self::core::{execute, Processor, Step};
