pub mod category;
pub mod contact;
