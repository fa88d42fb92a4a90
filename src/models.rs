pub mod agenda;
pub mod ai;
pub mod auth;
pub mod crm;
pub mod finance;
pub mod hr;
pub mod inventory;
pub mod settings;
pub mod system;
