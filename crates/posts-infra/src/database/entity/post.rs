//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for posts_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            surname: model.surname,
            title: model.title,
            content: model.content,
        }
    }
}

/// Conversion from a validated Domain NewPost to SeaORM ActiveModel.
/// The id is left unset so the database assigns it.
impl From<posts_core::domain::NewPost> for ActiveModel {
    fn from(post: posts_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            name: Set(post.name),
            surname: Set(post.surname),
            title: Set(post.title),
            content: Set(post.content),
        }
    }
}
