pub mod contact;
pub mod home;
