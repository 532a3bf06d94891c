//! Hash y verificación de contraseñas con bcrypt
//!
//! bcrypt es costoso en CPU, así que ambas operaciones se ejecutan
//! en el pool bloqueante de tokio.

use crate::utils::errors::{AppError, AppResult};

pub async fn hash_password(password: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hash task failed: {}", e)))?
        .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}

/// Devuelve `false` también cuando el hash almacenado no es un hash bcrypt válido.
pub async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verify task failed: {}", e)))?;

    match result {
        Ok(valid) => Ok(valid),
        Err(e) => {
            log::warn!("⚠️ Hash almacenado ilegible: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("pw1".to_string(), 4).await.unwrap();
        assert_ne!(hash, "pw1");
        assert!(verify_password("pw1".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("pw2".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salt() {
        let first = hash_password("pw1".to_string(), 4).await.unwrap();
        let second = hash_password("pw1".to_string(), 4).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_garbage_hash_does_not_verify() {
        assert!(!verify_password("pw1".to_string(), "not-a-hash".to_string()).await.unwrap());
    }
}
