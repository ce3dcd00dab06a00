pub mod blog;
pub mod consultation;
pub mod contact;
pub mod home;
