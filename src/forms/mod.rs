mod chat;
mod generate;

pub use chat::*;
pub use generate::*;
