// src/docs.rs

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services::auth::SESSION_COOKIE;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_session,
        handlers::auth::logout,

        // --- CRM ---
        handlers::crm::list_leads,
        handlers::crm::create_lead,
        handlers::crm::get_lead,
        handlers::crm::update_lead,
        handlers::crm::delete_lead,
        handlers::crm::upload_leads,
        handlers::crm::list_clients,
        handlers::crm::create_client,
        handlers::crm::get_client,
        handlers::crm::update_client,
        handlers::crm::delete_client,
        handlers::crm::list_lead_lists,
        handlers::crm::create_lead_list,
        handlers::crm::get_lead_list,
        handlers::crm::update_lead_list,
        handlers::crm::delete_lead_list,

        // --- HR ---
        handlers::hr::list_employees,
        handlers::hr::create_employee,
        handlers::hr::get_employee,
        handlers::hr::update_employee,
        handlers::hr::delete_employee,

        // --- Agenda ---
        handlers::agenda::list_events,
        handlers::agenda::create_event,
        handlers::agenda::get_event,
        handlers::agenda::update_event,
        handlers::agenda::delete_event,
        handlers::agenda::list_tasks,
        handlers::agenda::create_task,
        handlers::agenda::get_task,
        handlers::agenda::update_task,
        handlers::agenda::delete_task,

        // --- Finance ---
        handlers::finance::list_invoices,
        handlers::finance::create_invoice,
        handlers::finance::get_invoice,
        handlers::finance::update_invoice,
        handlers::finance::delete_invoice,
        handlers::finance::list_transactions,
        handlers::finance::create_transaction,
        handlers::finance::get_transaction,
        handlers::finance::update_transaction,
        handlers::finance::delete_transaction,

        // --- Inventory ---
        handlers::inventory::list_products,
        handlers::inventory::create_product,
        handlers::inventory::get_product,
        handlers::inventory::update_product,
        handlers::inventory::delete_product,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,

        // --- AI ---
        handlers::ai::chat,

        // --- System ---
        handlers::system::health,
        handlers::system::test_connection,
        handlers::system::seed,
        handlers::system::seed_info,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::SessionData,
            models::auth::LoginUserPayload,

            // --- CRM ---
            models::crm::LeadStatus,
            models::crm::Priority,
            models::crm::ClientStatus,
            models::crm::Lead,
            models::crm::UploadReport,
            models::crm::RowError,
            models::crm::Client,
            models::crm::LeadList,

            // --- HR ---
            models::hr::EmployeeStatus,
            models::hr::Employee,

            // --- Agenda ---
            models::agenda::Event,
            models::agenda::Task,
            models::agenda::TaskStatus,

            // --- Finance ---
            models::finance::InvoiceStatus,
            models::finance::TransactionKind,
            models::finance::TransactionStatus,
            models::finance::Invoice,
            models::finance::Transaction,
            models::finance::TransactionStats,

            // --- Inventory ---
            models::inventory::StockMode,
            models::inventory::ProductStatus,
            models::inventory::Product,

            // --- Settings ---
            models::settings::Settings,
            models::settings::Theme,

            // --- System ---
            models::system::ConnectionStatus,
            models::system::ServiceCheck,
            models::system::SeedCounts,
        )
    ),
    tags(
        (name = "Auth", description = "Login e sessão por cookie"),
        (name = "Leads", description = "Funil de vendas e importação CSV"),
        (name = "Clients", description = "Carteira de clientes"),
        (name = "Lists", description = "Listas de leads"),
        (name = "Employees", description = "Equipe"),
        (name = "Events", description = "Calendário"),
        (name = "Tasks", description = "Tarefas"),
        (name = "Invoices", description = "Faturas"),
        (name = "Transactions", description = "Receitas, despesas e indicadores"),
        (name = "Products", description = "Catálogo de produtos e serviços"),
        (name = "Settings", description = "Preferências do painel"),
        (name = "AI", description = "Assistente Gemini"),
        (name = "System", description = "Saúde, diagnóstico e dados de demonstração")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_and_the_cookie_scheme() {
        let doc = ApiDoc::openapi();

        for path in ["/api/leads/upload", "/api/invoices/{id}", "/api/settings", "/api/ai/chat", "/api/seed"] {
            assert!(doc.paths.paths.contains_key(path), "faltando {path}");
        }

        let schemes = &doc.components.as_ref().expect("components").security_schemes;
        assert!(schemes.contains_key("session_cookie"));
    }
}
