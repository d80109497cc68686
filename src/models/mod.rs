mod intent;
mod project;
mod reply;

pub use intent::*;
pub use project::*;
pub use reply::*;
