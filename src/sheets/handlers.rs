/**
 * Sheet HTTP Handlers
 *
 * The five CRUD endpoints under /sheets. All of them sit behind the auth
 * middleware and scope every store call by the authenticated owner, so one
 * user's requests can never observe another user's records; a foreign id
 * answers 404 exactly like a nonexistent one.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::sheets::store;
use crate::sheets::types::{CreateSheetRequest, Sheet, UpdateSheetRequest};

/// List the authenticated owner's sheets
///
/// GET /sheets - 200 with a JSON array, oldest first. An owner with no
/// sheets gets an empty array, not an error.
pub async fn list_sheets(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Sheet>>, AppError> {
    let sheets = store::list_sheets(&pool, &user.email).await?;
    Ok(Json(sheets))
}

/// Fetch one sheet
///
/// GET /sheets/{id} - 404 when the id does not exist for this owner,
/// including when it exists for somebody else.
pub async fn get_sheet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Sheet>, AppError> {
    let sheet = store::find_sheet(&pool, &id, &user.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("sheet {id} not found for {}", user.email);
            AppError::NotFound("sheet")
        })?;

    Ok(Json(sheet))
}

/// Create a sheet
///
/// POST /sheets - validates name, class, level and race, fills defaults for
/// the rest, and returns 201 with the record exactly as stored.
pub async fn create_sheet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateSheetRequest>,
) -> Result<(StatusCode, Json<Sheet>), AppError> {
    let sheet = request.into_sheet(&user.email)?;
    let sheet = insert_with_collision_retry(&pool, sheet).await?;

    tracing::info!("sheet {} created for {}", sheet.id, user.email);

    Ok((StatusCode::CREATED, Json(sheet)))
}

/// Insert a new sheet, absorbing one id collision
///
/// Ids are creation timestamps in milliseconds, so two creations landing on
/// the same clock tick collide on the primary key. The loser retries once
/// with the id bumped by one; a second collision propagates.
async fn insert_with_collision_retry(
    pool: &SqlitePool,
    mut sheet: Sheet,
) -> Result<Sheet, AppError> {
    match store::insert_sheet(pool, &sheet).await {
        Ok(()) => Ok(sheet),
        Err(e) if is_id_collision(&e) => {
            tracing::warn!("sheet id {} taken, retrying with bumped id", sheet.id);
            sheet.id = bump_id(&sheet.id);
            store::insert_sheet(pool, &sheet).await?;
            Ok(sheet)
        }
        Err(e) => Err(e),
    }
}

fn is_id_collision(error: &AppError) -> bool {
    matches!(
        error,
        AppError::Database(cause)
            if cause.as_database_error().is_some_and(|db| db.is_unique_violation())
    )
}

/// Successor of a numeric id; falls back to the clock if the id is not one
fn bump_id(id: &str) -> String {
    id.parse::<i64>()
        .map(|millis| (millis + 1).to_string())
        .unwrap_or_else(|_| (Utc::now().timestamp_millis() + 1).to_string())
}

/// Update a sheet's mutable fields
///
/// PUT /sheets/{id} - merges name, class, level and race into the stored
/// record; everything else is left untouched. Returns the merged record, or
/// 404 when no sheet matches the id for this owner.
pub async fn update_sheet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateSheetRequest>,
) -> Result<Json<Sheet>, AppError> {
    let sheet = store::update_sheet(&pool, &id, &user.email, &request)
        .await?
        .ok_or_else(|| {
            tracing::warn!("sheet {id} not found for {}", user.email);
            AppError::NotFound("sheet")
        })?;

    tracing::info!("sheet {} updated for {}", sheet.id, user.email);

    Ok(Json(sheet))
}

/// Delete a sheet
///
/// DELETE /sheets/{id} - 204 with an empty body on success, 404 otherwise.
pub async fn delete_sheet(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !store::delete_sheet(&pool, &id, &user.email).await? {
        tracing::warn!("sheet {id} not found for {}", user.email);
        return Err(AppError::NotFound("sheet"));
    }

    tracing::info!("sheet {id} deleted for {}", user.email);

    Ok(StatusCode::NO_CONTENT)
}
