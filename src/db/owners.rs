use crate::db::SqlDialect;
use crate::db::models::Owner;
use crate::error::PetclinicError;
use sqlx::AnyPool;

/// Persistence for [`Owner`] records. One statement per call, no caching.
#[derive(Clone)]
pub struct OwnerRepository {
    pool: AnyPool,
    dialect: SqlDialect,
}

impl OwnerRepository {
    pub fn new(pool: AnyPool, dialect: SqlDialect) -> Self {
        Self { pool, dialect }
    }

    /// Insert a new owner (id 0) or update an existing one.
    /// Returns the owner as stored, with its assigned id.
    pub async fn save(&self, owner: Owner) -> Result<Owner, PetclinicError> {
        if owner.is_new() {
            self.insert(owner).await
        } else {
            self.update(&owner).await?;
            Ok(owner)
        }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Owner>, PetclinicError> {
        let owner = sqlx::query_as::<_, Owner>(
            r#"SELECT id, first_name, last_name, address, city, telephone
               FROM owners WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(owner)
    }

    pub async fn find_all(&self) -> Result<Vec<Owner>, PetclinicError> {
        let owners = sqlx::query_as::<_, Owner>(
            r#"SELECT id, first_name, last_name, address, city, telephone
               FROM owners ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(owners)
    }

    async fn insert(&self, mut owner: Owner) -> Result<Owner, PetclinicError> {
        // The generated id is per connection, so read it back on the same one.
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            r#"INSERT INTO owners (first_name, last_name, address, city, telephone)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(owner.first_name.clone())
        .bind(owner.last_name.clone())
        .bind(owner.address.clone())
        .bind(owner.city.clone())
        .bind(owner.telephone.clone())
        .execute(&mut *conn)
        .await?;

        owner.id = match self.dialect {
            SqlDialect::MySql => result
                .last_insert_id()
                .ok_or_else(|| sqlx::Error::Protocol("insert returned no row id".to_string()))?,
            SqlDialect::Sqlite => {
                sqlx::query_scalar::<_, i64>("SELECT last_insert_rowid()")
                    .fetch_one(&mut *conn)
                    .await?
            }
        };
        Ok(owner)
    }

    async fn update(&self, owner: &Owner) -> Result<(), PetclinicError> {
        sqlx::query(
            r#"UPDATE owners SET
                first_name = ?,
                last_name = ?,
                address = ?,
                city = ?,
                telephone = ?
              WHERE id = ?"#,
        )
        .bind(owner.first_name.clone())
        .bind(owner.last_name.clone())
        .bind(owner.address.clone())
        .bind(owner.city.clone())
        .bind(owner.telephone.clone())
        .bind(owner.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
