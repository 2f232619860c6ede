//! Reply entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use forum_core::domain::{NewReply, Reply};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub comment_id: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub user_id: i32,
    pub reply_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::comment::Entity",
        from = "Column::CommentId",
        to = "super::comment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Comment,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl super::DomainEntity for Entity {
    type Domain = Reply;
    type Candidate = NewReply;
}

impl From<Model> for Reply {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            comment_id: model.comment_id,
            text: model.text,
            user_id: model.user_id,
            reply_date: model.reply_date.into(),
        }
    }
}

impl From<NewReply> for ActiveModel {
    fn from(reply: NewReply) -> Self {
        Self {
            id: NotSet,
            comment_id: Set(reply.comment_id),
            text: Set(reply.text),
            user_id: Set(reply.user_id),
            reply_date: Set(chrono::Utc::now().into()),
        }
    }
}
