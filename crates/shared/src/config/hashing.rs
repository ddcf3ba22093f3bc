use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{DEFAULT_COST, hash, verify};

#[derive(Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        Ok(hash(password, self.cost)?)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        if verify(password, hashed_password)? {
            Ok(())
        } else {
            Err(ServiceError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn compare_accepts_only_the_original_password() {
        let hashing = Hashing::with_cost(4);
        let hashed = hashing.hash_password("s3cret").await.unwrap();

        assert!(hashing.compare_password(&hashed, "s3cret").await.is_ok());
        assert!(matches!(
            hashing.compare_password(&hashed, "wrong").await,
            Err(ServiceError::InvalidCredentials)
        ));
    }
}
