pub mod contact;

pub use contact::{normalize, Contact, Field, Pattern};
