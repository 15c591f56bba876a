pub mod headers;
pub mod rate_limit;

pub use headers::*;
pub use rate_limit::*;
