use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{actor, director, errors, film_actor};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "film")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub year: i32,
    /// Not backed by a foreign key; may point at a deleted director.
    pub director_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Director,
    FilmActor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Director => Entity::belongs_to(director::Entity)
                .from(Column::DirectorId)
                .to(director::Column::Id)
                .into(),
            Relation::FilmActor => Entity::has_many(film_actor::Entity).into(),
        }
    }
}

impl Related<director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Director.def()
    }
}

impl Related<film_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FilmActor.def()
    }
}

impl Related<actor::Entity> for Entity {
    fn to() -> RelationDef {
        film_actor::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(film_actor::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    title: &str,
    year: i32,
    director_id: Option<i32>,
) -> Result<Model, errors::ModelError> {
    let title = errors::require_text("title", title)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(title.to_string()),
        year: Set(year),
        director_id: Set(director_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite title and year only; `director_id` is left as stored.
/// `None` when the id does not exist.
pub async fn retitle<C: ConnectionTrait>(
    db: &C,
    id: i32,
    title: &str,
    year: i32,
) -> Result<Option<Model>, errors::ModelError> {
    let title = errors::require_text("title", title)?;
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.title = Set(title.to_string());
    am.year = Set(year);
    am.updated_at = Set(Utc::now().into());
    Ok(Some(am.update(db).await?))
}
