//! Conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y aplica el schema.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::database::DatabaseConfig;

/// Pool de conexiones compartido por los repositorios
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir el pool y verificar que la base responde
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        log::info!("🔌 Conectando a la base de datos: {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("could not connect to {}", mask_database_url(&config.url)))?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("database did not answer the connection check")?;

        log::info!("✅ Base de datos conectada (max {} conexiones)", config.max_connections);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("failed to apply database migrations")?;
        log::info!("📜 Migraciones aplicadas");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    match url.rfind('@') {
        Some(at_pos) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
