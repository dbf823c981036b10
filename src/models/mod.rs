pub mod ad;
pub mod cover;
pub mod gemini;
pub mod preset;
pub mod request;

pub use ad::*;
pub use cover::*;
pub use gemini::*;
pub use preset::*;
pub use request::*;
