pub mod book;
pub mod catalog;
pub mod loan;
pub mod member;

pub use book::*;
pub use catalog::*;
pub use loan::*;
pub use member::*;
