// tests/common/pg.rs

//! Banco PostgreSQL descartável para os testes do armazenamento.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::OnceCell;

use estoque_vendas::db;
use estoque_vendas::store::PgInventoryStore;

const USER: &str = "estoque_test";
const PASSWORD: &str = "estoque_test_password";

/// Contêiner compartilhado pelos testes de um binário.
///
/// Cada `#[actix_web::test]` roda no próprio runtime, então a porta é
/// resolvida uma única vez, no runtime que subiu o contêiner.
struct SharedPostgres {
    _container: ContainerAsync<PostgresImage>,
    port: u16,
}

static POSTGRES: Lazy<OnceCell<SharedPostgres>> = Lazy::new(OnceCell::new);

static DATABASE_SEQ: AtomicUsize = AtomicUsize::new(0);

async fn start_postgres() -> SharedPostgres {
    let container = PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("estoque_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("falha ao iniciar o contêiner do PostgreSQL");

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("porta do contêiner indisponível");

    SharedPostgres { _container: container, port }
}

fn database_url(port: u16, database: &str) -> String {
    let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
        .unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// Banco isolado de um teste. O contêiner inteiro é descartado no fim.
#[derive(Debug, Clone)]
pub struct TestDb {
    pub pool: PgPool,
    pub name: String,
}

impl TestDb {
    /// Banco novo com o esquema aplicado por `db::run_migrations`.
    pub async fn new() -> Self {
        let test_db = Self::without_schema().await;

        db::run_migrations(&test_db.pool)
            .await
            .expect("falha ao aplicar o esquema");

        test_db
    }

    /// Banco novo e vazio, para testar a evolução de esquemas antigos.
    pub async fn without_schema() -> Self {
        let postgres = POSTGRES.get_or_init(start_postgres).await;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let name = format!(
            "estoque_test_{nanos}_{}",
            DATABASE_SEQ.fetch_add(1, Ordering::Relaxed)
        );

        let mut admin = PgConnection::connect(&database_url(postgres.port, "postgres"))
            .await
            .expect("falha ao conectar no banco administrativo");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("falha ao criar o banco de teste");

        admin.close().await.expect("falha ao fechar a conexão");

        let pool = db::connect(&database_url(postgres.port, &name), 10)
            .await
            .expect("falha ao conectar no banco de teste");

        Self { pool, name }
    }

    pub fn store(&self) -> PgInventoryStore {
        PgInventoryStore::new(self.pool.clone())
    }
}
