/**
 * Sheet Store
 *
 * Per-record SQL operations over the sheets table. Every query is scoped by
 * owner_email, so an id belonging to another owner behaves exactly like an
 * id that never existed; callers cannot tell the two apart.
 *
 * The attributes and abilities columns hold JSON text, decoded on the way
 * out and encoded on the way in.
 */

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::error::AppError;
use crate::sheets::types::{Sheet, UpdateSheetRequest};

/// List every sheet owned by `owner_email`, oldest first
pub async fn list_sheets(pool: &SqlitePool, owner_email: &str) -> Result<Vec<Sheet>, AppError> {
    let rows = sqlx::query(
        r#"
        SELECT id, owner_email, system, name, level, class, race, attributes, abilities
        FROM sheets
        WHERE owner_email = ?
        ORDER BY rowid ASC
        "#,
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_sheet).collect()
}

/// Fetch one sheet by id, scoped to its owner
pub async fn find_sheet(
    pool: &SqlitePool,
    id: &str,
    owner_email: &str,
) -> Result<Option<Sheet>, AppError> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_email, system, name, level, class, race, attributes, abilities
        FROM sheets
        WHERE id = ? AND owner_email = ?
        "#,
    )
    .bind(id)
    .bind(owner_email)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_sheet).transpose()
}

/// Insert a freshly created sheet
pub async fn insert_sheet(pool: &SqlitePool, sheet: &Sheet) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO sheets (id, owner_email, system, name, level, class, race, attributes, abilities)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&sheet.id)
    .bind(&sheet.owner_email)
    .bind(&sheet.system)
    .bind(&sheet.name)
    .bind(sheet.level)
    .bind(&sheet.class)
    .bind(&sheet.race)
    .bind(serde_json::to_string(&sheet.attributes)?)
    .bind(serde_json::to_string(&sheet.abilities)?)
    .execute(pool)
    .await?;

    Ok(())
}

/// Merge the mutable fields into a stored sheet and return the result
///
/// A single statement does the merge: absent payload fields fall back to the
/// stored value through COALESCE, and RETURNING hands back the merged row,
/// so two concurrent updates can never resurrect each other's overwritten
/// values. `None` means no sheet matched the id for this owner.
pub async fn update_sheet(
    pool: &SqlitePool,
    id: &str,
    owner_email: &str,
    changes: &UpdateSheetRequest,
) -> Result<Option<Sheet>, AppError> {
    let row = sqlx::query(
        r#"
        UPDATE sheets
        SET name = COALESCE(?, name),
            class = COALESCE(?, class),
            level = COALESCE(?, level),
            race = COALESCE(?, race)
        WHERE id = ? AND owner_email = ?
        RETURNING id, owner_email, system, name, level, class, race, attributes, abilities
        "#,
    )
    .bind(changes.name.as_deref())
    .bind(changes.class.as_deref())
    .bind(changes.level)
    .bind(changes.race.as_deref())
    .bind(id)
    .bind(owner_email)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(row_to_sheet).transpose()
}

/// Delete a sheet; `true` when a record matched and was removed
pub async fn delete_sheet(
    pool: &SqlitePool,
    id: &str,
    owner_email: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM sheets WHERE id = ? AND owner_email = ?")
        .bind(id)
        .bind(owner_email)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Decode one row, parsing the two JSON columns
fn row_to_sheet(row: &SqliteRow) -> Result<Sheet, AppError> {
    let attributes: String = row.try_get("attributes")?;
    let abilities: String = row.try_get("abilities")?;

    Ok(Sheet {
        id: row.try_get("id")?,
        owner_email: row.try_get("owner_email")?,
        system: row.try_get("system")?,
        name: row.try_get("name")?,
        level: row.try_get("level")?,
        class: row.try_get("class")?,
        race: row.try_get("race")?,
        attributes: serde_json::from_str(&attributes)?,
        abilities: serde_json::from_str(&abilities)?,
    })
}
