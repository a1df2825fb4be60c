//! This file serves as the root for all SeaORM entity modules.
//! We define the persisted data models for the demand dashboard here:
//! early-access signups and the registry of accepted CSV uploads.

pub mod csv_upload;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::csv_upload::Entity as CsvUpload;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        // Try to apply migrations first
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        // Setup database
        let db = setup_db().await?;

        // Create signups
        let user1 = user::ActiveModel {
            username: Set("quickmart_delhi".to_string()),
            email: Set("rajesh@quickmart.example".to_string()),
            phone: Set(Some("+91 98100 00000".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let user2 = user::ActiveModel {
            username: Set("priya_retail".to_string()),
            email: Set("priya@retail.example".to_string()),
            phone: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Record an accepted upload
        let upload = csv_upload::ActiveModel {
            original_name: Set("inventory.csv".to_string()),
            stored_name: Set("upload-0001.csv".to_string()),
            size_bytes: Set(2048),
            row_count: Set(120),
            column_count: Set(5),
            uploaded_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Read back and verify data
        let users = User::find().all(&db).await?;
        assert_eq!(users.len(), 2);
        assert!(users.iter().any(|u| u.username == "quickmart_delhi"));
        assert!(users.iter().any(|u| u.username == "priya_retail"));
        assert_eq!(user1.phone.as_deref(), Some("+91 98100 00000"));
        assert_eq!(user2.phone, None);

        let uploads = CsvUpload::find().all(&db).await?;
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].id, upload.id);
        assert_eq!(uploads[0].original_name, "inventory.csv");
        assert_eq!(uploads[0].row_count, 120);
        assert_eq!(uploads[0].column_count, 5);

        // Lookup by stored name
        let by_stored = CsvUpload::find()
            .filter(csv_upload::Column::StoredName.eq("upload-0001.csv"))
            .one(&db)
            .await?;
        assert!(by_stored.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;

        user::ActiveModel {
            username: Set("quickserve_mumbai".to_string()),
            email: Set("amit@quickserve.example".to_string()),
            phone: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Same username, different email
        let duplicate = user::ActiveModel {
            username: Set("quickserve_mumbai".to_string()),
            email: Set("other@quickserve.example".to_string()),
            phone: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(duplicate.is_err());
        let message = duplicate.unwrap_err().to_string().to_lowercase();
        assert!(message.contains("unique"), "unexpected error: {message}");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;

        user::ActiveModel {
            username: Set("freshcart_pune".to_string()),
            email: Set("sarah@freshcart.example".to_string()),
            phone: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let duplicate = user::ActiveModel {
            username: Set("freshcart_pune_two".to_string()),
            email: Set("sarah@freshcart.example".to_string()),
            phone: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
