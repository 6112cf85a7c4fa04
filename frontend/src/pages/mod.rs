pub mod home;
pub mod boggle;
