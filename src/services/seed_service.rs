// src/services/seed_service.rs
// Dados de demonstração (nomes e empresas do Cazaquistão). Apaga tudo antes de inserir.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{AgendaRepository, CrmRepository, FinanceRepository, HrRepository, InventoryRepository},
    models::{
        agenda::{NewEvent, NewTask, TaskStatus},
        crm::{ClientStatus, LeadStatus, NewClient, NewLead, Priority},
        finance::{InvoiceStatus, NewInvoice, NewTransaction, TransactionKind, TransactionStatus},
        hr::{EmployeeStatus, NewEmployee},
        inventory::{NewProduct, ProductStatus, StockMode},
        system::SeedCounts,
    },
    services::finance_service::{format_invoice_number, signed_amount},
};

const FIRST_NAMES: [&str; 20] = [
    "Нурлан", "Асет", "Ерболат", "Бауыржан", "Талгат", "Канат", "Серик", "Марат", "Данияр", "Айдос",
    "Айгуль", "Динара", "Гульнара", "Жанна", "Камила", "Мадина", "Сауле", "Асель", "Дина", "Жанар",
];

const LAST_NAMES: [&str; 20] = [
    "Сериков", "Нурланов", "Алиев", "Жумабаев", "Касымов", "Байтурсынов", "Абдуллин", "Оспанов", "Мухтаров",
    "Токаев", "Жансугуров", "Кенжебаев", "Садыков", "Умирзаков", "Ахметов", "Бектуров", "Искаков",
    "Турсынов", "Есимов", "Назарбаев",
];

// Transliteração para montar e-mails ASCII
const FIRST_NAMES_LATIN: [&str; 20] = [
    "nurlan", "aset", "erbolat", "bauyrzhan", "talgat", "kanat", "serik", "marat", "daniyar", "aidos",
    "aigul", "dinara", "gulnara", "zhanna", "kamila", "madina", "saule", "asel", "dina", "zhanar",
];

const LAST_NAMES_LATIN: [&str; 20] = [
    "serikov", "nurlanov", "aliev", "zhumabaev", "kasymov", "baitursynov", "abdullin", "ospanov", "mukhtarov",
    "tokaev", "zhansugurov", "kenzhebaev", "sadykov", "umirzakov", "akhmetov", "bekturov", "iskakov",
    "tursynov", "esimov", "nazarbaev",
];

const COMPANIES: [&str; 20] = [
    "ТОО \"КазТехСервис\"", "АО \"Алматы Энерго\"", "ТОО \"Астана Групп\"", "АО \"КазМунайГаз\"",
    "ТОО \"СтройИнвест\"", "АО \"Народный Банк\"", "ТОО \"ТехноМир\"", "АО \"Казахтелеком\"",
    "ТОО \"АгроХолдинг\"", "АО \"Эйр Астана\"", "ТОО \"МедСервис\"", "АО \"KEGOC\"", "ТОО \"ЛогистикКЗ\"",
    "АО \"Казпочта\"", "ТОО \"ФудМаркет\"", "АО \"КазТрансОйл\"", "ТОО \"IT Solutions KZ\"",
    "АО \"Самрук-Казына\"", "ТОО \"ЭкоСтрой\"", "АО \"Kaspi Bank\"",
];

const CITIES: [&str; 10] = [
    "Алматы", "Астана", "Шымкент", "Караганда", "Актобе", "Тараз", "Павлодар", "Семей", "Атырау", "Костанай",
];

const STREETS: [&str; 5] = ["Абая", "Достык", "Сатпаева", "Толе би", "Жандосова"];
const EMAIL_DOMAINS: [&str; 5] = ["mail.kz", "gmail.com", "yandex.kz", "inbox.kz", "outlook.com"];
const CLIENT_GROUPS: [&str; 3] = ["ungrouped", "VIP", "Корпоративные"];

const DEPARTMENTS: [&str; 6] = ["Продажи", "Маркетинг", "Разработка", "Поддержка", "Финансы", "HR"];
const POSITIONS: [&str; 6] = [
    "Менеджер", "Старший специалист", "Руководитель отдела", "Директор", "Аналитик", "Специалист",
];

const INCOME_CATEGORIES: [&str; 5] = ["Продажи", "Услуги", "Консалтинг", "Подписка", "Комиссия"];
const EXPENSE_CATEGORIES: [&str; 6] = ["Зарплата", "Аренда", "Реклама", "Оборудование", "Транспорт", "Коммунальные"];
const MONTHS: [&str; 6] = ["январь", "февраль", "март", "апрель", "май", "июнь"];

const SERVICES: [&str; 6] = [
    "Внедрение CRM", "Техническая поддержка", "Консалтинг", "Разработка ПО", "Обучение персонала", "Аудит систем",
];

const EVENT_TITLES: [&str; 12] = [
    "Встреча с клиентом", "Презентация продукта", "Планёрка команды", "Звонок партнёру",
    "Обсуждение проекта", "Демонстрация CRM", "Переговоры", "Тренинг по продажам",
    "Отчёт руководству", "Анализ конкурентов", "Стратегическая сессия", "Подписание договора",
];
const EVENT_COLORS: [&str; 5] = ["indigo", "emerald", "amber", "rose", "sky"];

const TASK_TITLES: [&str; 12] = [
    "Связаться с клиентом", "Подготовить презентацию", "Отправить коммерческое предложение",
    "Провести анализ рынка", "Обновить базу данных", "Написать отчёт", "Организовать встречу",
    "Проверить контракт", "Настроить интеграцию", "Обучить новых сотрудников",
    "Подготовить документы", "Согласовать бюджет",
];

// (nome, categoria, preço, descrição)
const PRODUCTS: [(&str, &str, i64, &str); 8] = [
    ("CRM Корпоративный", "Программное обеспечение", 500_000, "Полнофункциональная CRM система для крупных компаний"),
    ("CRM Стартап", "Программное обеспечение", 150_000, "Облегчённая версия CRM для стартапов и малого бизнеса"),
    ("Внедрение CRM", "Услуги", 2_000_000, "Полный цикл внедрения CRM системы с обучением"),
    ("Техническая поддержка", "Услуги", 100_000, "Ежемесячная техническая поддержка 24/7"),
    ("Обучение персонала", "Услуги", 300_000, "Корпоративное обучение работе с CRM"),
    ("Интеграция 1С", "Интеграции", 500_000, "Интеграция CRM с 1С Бухгалтерией"),
    ("API доступ", "Дополнительно", 50_000, "Доступ к API для кастомных интеграций"),
    ("Мобильное приложение", "Программное обеспечение", 75_000, "Мобильное приложение для iOS и Android"),
];

const LEAD_COUNT: usize = 20;
const CLIENT_COUNT: usize = 15;
const EMPLOYEE_COUNT: usize = 10;
const TRANSACTION_COUNT: usize = 25;
const INVOICE_COUNT: usize = 12;
const EVENT_COUNT: usize = 15;

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

struct Person {
    name: String,
    email: String,
}

fn person<R: Rng>(rng: &mut R) -> Person {
    let first = rng.gen_range(0..FIRST_NAMES.len());
    let last = rng.gen_range(0..LAST_NAMES.len());
    Person {
        name: format!("{} {}", FIRST_NAMES[first], LAST_NAMES[last]),
        email: format!(
            "{}.{}@{}",
            FIRST_NAMES_LATIN[first],
            LAST_NAMES_LATIN[last],
            pick(rng, &EMAIL_DOMAINS)
        ),
    }
}

fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "+7 (7{}{}) {}-{}-{}",
        rng.gen_range(0..=9),
        rng.gen_range(0..=9),
        rng.gen_range(100..=999),
        rng.gen_range(10..=99),
        rng.gen_range(10..=99)
    )
}

fn money<R: Rng>(rng: &mut R, min: i64, max: i64) -> Decimal {
    Decimal::from(rng.gen_range(min..=max))
}

fn days_ago<R: Rng>(rng: &mut R, max_days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(rng.gen_range(0..max_days))
}

/// Dia futuro aleatório, no início da hora indicada.
fn days_ahead_at<R: Rng>(rng: &mut R, max_days: i64, hour: u32) -> DateTime<Utc> {
    let day = (Utc::now() + Duration::days(rng.gen_range(0..max_days))).date_naive();
    day.and_hms_opt(hour, 0, 0).map(|naive| naive.and_utc()).unwrap_or_else(Utc::now)
}

/// Conjunto completo de registros de demonstração, ainda fora do banco.
#[derive(Debug)]
pub struct DemoDataset {
    pub leads: Vec<NewLead>,
    pub clients: Vec<NewClient>,
    pub employees: Vec<NewEmployee>,
    pub transactions: Vec<NewTransaction>,
    pub invoices: Vec<NewInvoice>,
    pub events: Vec<NewEvent>,
    pub tasks: Vec<NewTask>,
    pub products: Vec<NewProduct>,
}

impl DemoDataset {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            leads: Self::leads(rng),
            clients: Self::clients(rng),
            employees: Self::employees(rng),
            transactions: Self::transactions(rng),
            invoices: Self::invoices(rng),
            events: Self::events(rng),
            tasks: Self::tasks(rng),
            products: Self::products(rng),
        }
    }

    pub fn counts(&self) -> SeedCounts {
        SeedCounts {
            leads: self.leads.len(),
            clients: self.clients.len(),
            employees: self.employees.len(),
            transactions: self.transactions.len(),
            invoices: self.invoices.len(),
            events: self.events.len(),
            tasks: self.tasks.len(),
            products: self.products.len(),
        }
    }

    fn leads<R: Rng>(rng: &mut R) -> Vec<NewLead> {
        // Posições contínuas dentro de cada coluna do funil
        let mut next_in_column: HashMap<LeadStatus, i32> = HashMap::new();

        (0..LEAD_COUNT)
            .map(|_| {
                let contact = person(rng);
                let status = *pick(rng, &LeadStatus::ALL);
                let position = next_in_column.entry(status).or_insert(0);
                let lead = NewLead {
                    name: contact.name,
                    email: Some(contact.email),
                    phone: Some(phone(rng)),
                    company: Some(pick(rng, &COMPANIES).to_string()),
                    value: money(rng, 500_000, 15_000_000),
                    status,
                    priority: *pick(rng, &[Priority::Low, Priority::Medium, Priority::High]),
                    notes: Some(format!("Потенциальный клиент из {}", pick(rng, &CITIES))),
                    assigned_to: None,
                    position: *position,
                };
                *position += 1;
                lead
            })
            .collect()
    }

    fn clients<R: Rng>(rng: &mut R) -> Vec<NewClient> {
        (0..CLIENT_COUNT)
            .map(|_| {
                let contact = person(rng);
                NewClient {
                    name: contact.name,
                    email: Some(contact.email),
                    phone: Some(phone(rng)),
                    company: Some(pick(rng, &COMPANIES).to_string()),
                    website: None,
                    address: Some(format!(
                        "{}, ул. {} {}",
                        pick(rng, &CITIES),
                        pick(rng, &STREETS),
                        rng.gen_range(1..=200)
                    )),
                    group: pick(rng, &CLIENT_GROUPS).to_string(),
                    status: *pick(rng, &[ClientStatus::Active, ClientStatus::Inactive, ClientStatus::Prospect]),
                    total_value: money(rng, 1_000_000, 50_000_000),
                    notes: Some(format!("Клиент с {} года", rng.gen_range(2018..=2024))),
                }
            })
            .collect()
    }

    fn employees<R: Rng>(rng: &mut R) -> Vec<NewEmployee> {
        (0..EMPLOYEE_COUNT)
            .map(|i| {
                let contact = person(rng);
                let department = *pick(rng, &DEPARTMENTS);
                NewEmployee {
                    name: contact.name,
                    email: contact.email,
                    phone: Some(phone(rng)),
                    role: format!("{} {}", pick(rng, &POSITIONS), department.to_lowercase()),
                    department: Some(department.to_string()),
                    location: Some(pick(rng, &CITIES).to_string()),
                    // O primeiro funcionário está sempre ativo
                    status: if i == 0 {
                        EmployeeStatus::Active
                    } else {
                        *pick(rng, &[EmployeeStatus::Active, EmployeeStatus::OnLeave, EmployeeStatus::Terminated])
                    },
                    salary: Some(money(rng, 300_000, 1_500_000)),
                    hire_date: Some(days_ago(rng, 1000)),
                    notes: None,
                }
            })
            .collect()
    }

    fn transactions<R: Rng>(rng: &mut R) -> Vec<NewTransaction> {
        (0..TRANSACTION_COUNT)
            .map(|_| {
                let kind = *pick(rng, &[TransactionKind::Income, TransactionKind::Expense]);
                let (prefix, category) = match kind {
                    TransactionKind::Income => ("Поступление", *pick(rng, &INCOME_CATEGORIES)),
                    TransactionKind::Expense => ("Оплата", *pick(rng, &EXPENSE_CATEGORIES)),
                };
                NewTransaction {
                    description: format!("{prefix}: {category}"),
                    amount: signed_amount(kind, money(rng, 100_000, 5_000_000)),
                    kind,
                    category: Some(category.to_string()),
                    date: days_ago(rng, 90),
                    status: *pick(
                        rng,
                        &[TransactionStatus::Completed, TransactionStatus::Pending, TransactionStatus::Cancelled],
                    ),
                    reference: Some(format!("ТР-{}", rng.gen_range(1000..=9999))),
                    notes: Some(format!("{} за {}", category, pick(rng, &MONTHS))),
                }
            })
            .collect()
    }

    fn invoices<R: Rng>(rng: &mut R) -> Vec<NewInvoice> {
        (0..INVOICE_COUNT)
            .map(|_| {
                let contact = person(rng);
                let issue_date = days_ago(rng, 60);
                NewInvoice {
                    client_name: contact.name,
                    client_email: Some(contact.email),
                    service: pick(rng, &SERVICES).to_string(),
                    amount: money(rng, 500_000, 10_000_000),
                    status: *pick(
                        rng,
                        &[InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Overdue, InvoiceStatus::Cancelled],
                    ),
                    due_date: issue_date + Duration::days(30),
                    issue_date,
                    notes: Some(format!("Счёт для {}", pick(rng, &COMPANIES))),
                }
            })
            .collect()
    }

    fn events<R: Rng>(rng: &mut R) -> Vec<NewEvent> {
        (0..EVENT_COUNT)
            .map(|_| {
                let start_hour = rng.gen_range(9..=17);
                let start_date = days_ahead_at(rng, 30, start_hour);
                let attendees = vec![person(rng).name, person(rng).name];
                NewEvent {
                    title: pick(rng, &EVENT_TITLES).to_string(),
                    description: Some(format!("Участники: {}", attendees.join(", "))),
                    start_date,
                    end_date: start_date + Duration::hours(rng.gen_range(1..=2)),
                    all_day: false,
                    color: pick(rng, &EVENT_COLORS).to_string(),
                    location: Some(format!("{}, офис {}", pick(rng, &CITIES), pick(rng, &COMPANIES))),
                    attendees,
                }
            })
            .collect()
    }

    fn tasks<R: Rng>(rng: &mut R) -> Vec<NewTask> {
        TASK_TITLES
            .iter()
            .map(|title| NewTask {
                title: title.to_string(),
                description: Some(format!("Задача для {}", pick(rng, &COMPANIES))),
                priority: *pick(rng, &[Priority::Low, Priority::Medium, Priority::High]),
                status: *pick(rng, &[TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed]),
                due_date: Some(days_ahead_at(rng, 14, 18)),
                assignee: Some(person(rng).name),
            })
            .collect()
    }

    fn products<R: Rng>(rng: &mut R) -> Vec<NewProduct> {
        PRODUCTS
            .iter()
            .enumerate()
            .map(|(i, (name, category, price, description))| {
                let stock = *pick(rng, &[StockMode::Unlimited, StockMode::Limited, StockMode::OutOfStock]);
                NewProduct {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    price: Decimal::from(*price),
                    category: category.to_string(),
                    stock,
                    stock_quantity: (stock == StockMode::Limited).then(|| rng.gen_range(10..=100)),
                    status: if i < 6 {
                        ProductStatus::Active
                    } else {
                        *pick(rng, &[ProductStatus::Active, ProductStatus::Draft, ProductStatus::Archived])
                    },
                    sku: Some(format!("PRD-{:03}", i + 1)),
                }
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct SeedService {
    crm_repo: CrmRepository,
    hr_repo: HrRepository,
    agenda_repo: AgendaRepository,
    finance_repo: FinanceRepository,
    inventory_repo: InventoryRepository,
}

impl SeedService {
    pub fn new(
        crm_repo: CrmRepository,
        hr_repo: HrRepository,
        agenda_repo: AgendaRepository,
        finance_repo: FinanceRepository,
        inventory_repo: InventoryRepository,
    ) -> Self {
        Self { crm_repo, hr_repo, agenda_repo, finance_repo, inventory_repo }
    }

    /// Substitui os dados de negócio pelo conjunto de demonstração, numa única transação.
    /// Usuários, listas de leads e configurações não são tocados.
    pub async fn reseed(&self, pool: &PgPool) -> Result<SeedCounts, AppError> {
        let dataset = DemoDataset::generate(&mut StdRng::from_entropy());

        let mut tx = pool.begin().await?;

        // A sequence das faturas não é reiniciada: números antigos nunca voltam
        sqlx::query("TRUNCATE leads, clients, employees, transactions, invoices, events, tasks, products")
            .execute(&mut *tx)
            .await?;

        for lead in &dataset.leads {
            self.crm_repo.create_lead(&mut *tx, lead).await?;
        }
        for client in &dataset.clients {
            self.crm_repo.create_client(&mut *tx, client).await?;
        }
        for employee in &dataset.employees {
            self.hr_repo.create_employee(&mut *tx, employee).await?;
        }
        for transaction in &dataset.transactions {
            self.finance_repo.create_transaction(&mut *tx, transaction).await?;
        }
        for invoice in &dataset.invoices {
            let sequence = self.finance_repo.next_invoice_sequence(&mut *tx).await?;
            self.finance_repo
                .create_invoice(&mut *tx, &format_invoice_number(sequence), invoice)
                .await?;
        }
        for event in &dataset.events {
            self.agenda_repo.create_event(&mut *tx, event).await?;
        }
        for task in &dataset.tasks {
            self.agenda_repo.create_task(&mut *tx, task).await?;
        }
        for product in &dataset.products {
            self.inventory_repo.create_product(&mut *tx, product).await?;
        }

        tx.commit().await?;

        let counts = dataset.counts();
        tracing::info!("🌱 Dados de demonstração recriados: {:?}", counts);
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DemoDataset {
        DemoDataset::generate(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn dataset_has_the_advertised_sizes() {
        let counts = dataset().counts();

        assert_eq!(
            counts,
            SeedCounts {
                leads: 20,
                clients: 15,
                employees: 10,
                transactions: 25,
                invoices: 12,
                events: 15,
                tasks: 12,
                products: 8,
            }
        );
    }

    #[test]
    fn lead_positions_are_contiguous_per_column() {
        let data = dataset();

        for status in LeadStatus::ALL {
            let mut positions: Vec<i32> =
                data.leads.iter().filter(|l| l.status == status).map(|l| l.position).collect();
            positions.sort_unstable();
            let expected: Vec<i32> = (0..positions.len() as i32).collect();
            assert_eq!(positions, expected, "coluna {status:?}");
        }
    }

    #[test]
    fn transactions_follow_the_sign_rule() {
        for t in dataset().transactions {
            match t.kind {
                TransactionKind::Income => assert!(t.amount > Decimal::ZERO),
                TransactionKind::Expense => assert!(t.amount < Decimal::ZERO),
            }
        }
    }

    #[test]
    fn events_end_after_they_start() {
        for e in dataset().events {
            assert!(e.end_date > e.start_date);
            assert_eq!(e.attendees.len(), 2);
        }
    }

    #[test]
    fn products_have_sequential_skus_and_consistent_stock() {
        let products = dataset().products;

        assert_eq!(products[0].sku.as_deref(), Some("PRD-001"));
        assert_eq!(products[7].sku.as_deref(), Some("PRD-008"));
        for p in &products {
            assert_eq!(p.stock_quantity.is_some(), p.stock == StockMode::Limited);
        }
        assert!(products[..6].iter().all(|p| p.status == ProductStatus::Active));
    }

    #[test]
    fn first_employee_is_active() {
        assert_eq!(dataset().employees[0].status, EmployeeStatus::Active);
    }
}
