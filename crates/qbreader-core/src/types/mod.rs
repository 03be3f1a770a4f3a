mod category;
mod difficulty;
mod packet;
mod query;
mod question;

pub use category::*;
pub use difficulty::*;
pub use packet::*;
pub use query::*;
pub use question::*;
