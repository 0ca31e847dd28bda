pub mod readings;
pub mod user_roles;
