pub mod agenda_service;
pub mod ai_service;
pub mod auth;
pub mod crm_service;
pub mod finance_service;
pub mod hr_service;
pub mod inventory_service;
pub mod seed_service;
pub mod settings_service;
pub mod system_service;
