use contracts::domain::a001_scenario::ScenarioStatus;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_scenario")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub scenario_type: String,
    /// Merged parameter bag as JSON text, simulation_type/period included.
    pub parameters: String,
    pub revenue_impact: f64,
    pub cost_impact: f64,
    pub margin_impact: f64,
    pub probability: f64,
    pub status: String,
    pub created_by: String,
    /// Milliseconds since epoch.
    pub created_at: i64,
    pub updated_at: i64,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(row: &Model) -> ActiveModel {
    ActiveModel {
        id: Set(row.id.clone()),
        name: Set(row.name.clone()),
        description: Set(row.description.clone()),
        scenario_type: Set(row.scenario_type.clone()),
        parameters: Set(row.parameters.clone()),
        revenue_impact: Set(row.revenue_impact),
        cost_impact: Set(row.cost_impact),
        margin_impact: Set(row.margin_impact),
        probability: Set(row.probability),
        status: Set(row.status.clone()),
        created_by: Set(row.created_by.clone()),
        created_at: Set(row.created_at),
        updated_at: Set(row.updated_at),
        is_deleted: Set(row.is_deleted),
    }
}

pub async fn insert(row: &Model) -> anyhow::Result<()> {
    to_active(row).insert(conn()).await?;
    Ok(())
}

/// Fetch a live (non-deleted) scenario.
pub async fn fetch_by_id(id: &str) -> anyhow::Result<Option<Model>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result)
}

/// List live scenarios, most recently created first.
pub async fn list(status: Option<&str>) -> anyhow::Result<Vec<Model>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }
    let rows = query
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(rows)
}

/// Rewrite the mutable columns of an existing row.
pub async fn update(row: &Model) -> anyhow::Result<()> {
    let mut active = to_active(row);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Soft delete. Returns false when the row is absent or already
/// deleted, so delete-of-deleted surfaces as NotFound upstream.
pub async fn mark_deleted(id: &str, now_ms: i64) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::Status, Expr::value(ScenarioStatus::Deleted.as_str()))
        .col_expr(Column::UpdatedAt, Expr::value(now_ms))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
