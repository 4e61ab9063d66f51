//! Migration: Create the articles table.

use sea_orm_migration::prelude::*;

use crate::config::STATUS_DRAFT;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Articles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Articles::Title).string().not_null())
                    .col(ColumnDef::new(Articles::Subtitle).string().null())
                    .col(ColumnDef::new(Articles::Content).text().not_null())
                    .col(ColumnDef::new(Articles::Category).string().not_null())
                    .col(ColumnDef::new(Articles::ReadTime).integer().null())
                    .col(ColumnDef::new(Articles::ImageUrl).string().null())
                    .col(ColumnDef::new(Articles::Author).string().null())
                    .col(
                        ColumnDef::new(Articles::PublishDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Articles::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Articles::Status)
                            .string()
                            .not_null()
                            .default(STATUS_DRAFT),
                    )
                    .col(
                        ColumnDef::new(Articles::Tags)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Articles::Slug).string().null())
                    .col(
                        ColumnDef::new(Articles::LastModified)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Slug uniqueness; Postgres treats NULLs as distinct, so absent
        // slugs never conflict with each other
        manager
            .create_index(
                Index::create()
                    .unique()
                    .name("idx_articles_slug")
                    .table(Articles::Table)
                    .col(Articles::Slug)
                    .to_owned(),
            )
            .await?;

        // Reader-scoped queries filter on status and sort by publish date
        manager
            .create_index(
                Index::create()
                    .name("idx_articles_status")
                    .table(Articles::Table)
                    .col(Articles::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_publish_date")
                    .table(Articles::Table)
                    .col(Articles::PublishDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_category")
                    .table(Articles::Table)
                    .col(Articles::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Articles {
    Table,
    Id,
    Title,
    Subtitle,
    Content,
    Category,
    ReadTime,
    ImageUrl,
    Author,
    PublishDate,
    Featured,
    Status,
    Tags,
    Slug,
    LastModified,
}
