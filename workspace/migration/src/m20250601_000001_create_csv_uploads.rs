use crate::entity_iden::EntityIden;
use model::entities::csv_upload;
use model::entities::prelude::*;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create csv_uploads table
        manager
            .create_table(
                Table::create()
                    .table(CsvUpload::table())
                    .if_not_exists()
                    .col(pk_auto(CsvUpload::column(csv_upload::Column::Id)))
                    .col(string(CsvUpload::column(csv_upload::Column::OriginalName)))
                    .col(string(CsvUpload::column(csv_upload::Column::StoredName)).unique_key())
                    .col(big_integer(CsvUpload::column(csv_upload::Column::SizeBytes)))
                    .col(big_integer(CsvUpload::column(csv_upload::Column::RowCount)))
                    .col(big_integer(CsvUpload::column(csv_upload::Column::ColumnCount)))
                    .col(timestamp_with_time_zone(CsvUpload::column(
                        csv_upload::Column::UploadedAt,
                    )))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CsvUpload::table()).to_owned())
            .await?;

        Ok(())
    }
}
