use sea_orm::entity::prelude::*;

/// Registry row for one accepted CSV upload.
/// The raw bytes live on disk under `stored_name`; the row records the
/// browser-supplied name and the parsed table dimensions.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "csv_uploads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// File name as submitted by the browser, display only.
    pub original_name: String,
    /// Name of the file in the upload directory, unique per upload.
    #[sea_orm(unique)]
    pub stored_name: String,
    pub size_bytes: i64,
    pub row_count: i64,
    pub column_count: i64,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
