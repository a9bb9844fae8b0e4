mod gradient_cache;

pub use self::gradient_cache::*;
