use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, film};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "director")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Film,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Film => Entity::has_many(film::Entity).into(),
        }
    }
}

impl Related<film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    let name = errors::require_text("name", name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Rename an existing director; `None` when the id does not exist.
pub async fn rename<C: ConnectionTrait>(db: &C, id: i32, name: &str) -> Result<Option<Model>, errors::ModelError> {
    let name = errors::require_text("name", name)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}
