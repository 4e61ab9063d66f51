//! SeaORM entity for the `articles` table.

use sea_orm::entity::prelude::*;

use crate::domain::{Article, ArticleStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub read_time: Option<i32>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub publish_date: DateTimeUtc,
    pub featured: bool,
    pub status: String,
    pub tags: Vec<String>,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    pub last_modified: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Article {
    fn from(model: Model) -> Self {
        Article {
            id: model.id,
            title: model.title,
            subtitle: model.subtitle,
            content: model.content,
            category: model.category,
            read_time: model.read_time,
            image_url: model.image_url,
            author: model.author,
            publish_date: model.publish_date,
            featured: model.featured,
            // Writes only ever persist valid literals; unknown values
            // decode as draft rather than failing the whole row
            status: ArticleStatus::from(model.status.as_str()),
            tags: model.tags,
            slug: model.slug,
            last_modified: model.last_modified,
        }
    }
}
