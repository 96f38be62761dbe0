pub mod personal_info;
