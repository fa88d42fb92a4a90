pub mod agenda_repo;
pub use agenda_repo::AgendaRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod hr_repo;
pub use hr_repo::HrRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
