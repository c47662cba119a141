use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Media kind code: "series", "movie" or "anime".
    #[sea_orm(column_name = "type")]
    pub media_type: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub actors: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub video_url: Option<String>,
    pub rating: f32,
    pub episodes: i32,
    pub current_episode: i32,
    /// Watch-progress code: "watching", "completed" or "planned".
    pub status: String,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
