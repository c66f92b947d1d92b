mod health;
mod root;

pub use health::health;
pub use root::{root, GREETING};
