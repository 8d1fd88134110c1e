pub mod card;
pub mod deck;
pub mod report;
pub mod suggestion;

pub use card::*;
pub use deck::*;
pub use report::*;
pub use suggestion::*;
