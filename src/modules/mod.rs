pub mod contact;
pub mod experience;
pub mod personal_info;
pub mod project;
pub mod seed;
pub mod skill;
pub mod technology;
