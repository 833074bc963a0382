//! Post entity for SeaORM.
//!
//! The embedded `author` and `like` objects are flattened into columns so the
//! like counter can be incremented in a single UPDATE.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{Author, Like};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub author_name: String,
    #[sea_orm(column_type = "Text")]
    pub author_img: String,
    pub date: String,
    pub like_count: i64,
    pub like_isliked: bool,
    pub read_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            category: model.category,
            title: model.title,
            description: model.description,
            author: Author {
                name: model.author_name,
                img: model.author_img,
            },
            date: model.date,
            like: Like {
                count: model.like_count,
                isliked: model.like_isliked,
            },
            read_time: model.read_time,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            image: Set(post.image),
            category: Set(post.category),
            title: Set(post.title),
            description: Set(post.description),
            author_name: Set(post.author.name),
            author_img: Set(post.author.img),
            date: Set(post.date),
            like_count: Set(post.like.count),
            like_isliked: Set(post.like.isliked),
            read_time: Set(post.read_time),
        }
    }
}
