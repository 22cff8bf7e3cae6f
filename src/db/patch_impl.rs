//! MarketplacePatch -> DbPatchable implementation.
//!
//! This sits in the `db` module because it contains SQL/table knowledge.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::db::models::EntityKind;
use crate::error::MarketplaceError;
use crate::patches::{CarPatch, DbPatchable, MarketplacePatch, SalePatch, UserPatch};

#[async_trait]
impl DbPatchable for MarketplacePatch {
    async fn apply_patch(&self, pool: &SqlitePool) -> Result<(), MarketplaceError> {
        let id = self.id();
        let (entity, affected) = match self {
            MarketplacePatch::User { patch, .. } => {
                let UserPatch {
                    password_hash,
                    first_name,
                    last_name,
                    phone,
                    avatar_url,
                } = patch.clone();

                let res = sqlx::query(
                    r"
                    UPDATE users
                    SET
                        password_hash = COALESCE(?, password_hash),
                        first_name = COALESCE(?, first_name),
                        last_name = COALESCE(?, last_name),
                        phone = COALESCE(?, phone),
                        avatar_url = COALESCE(?, avatar_url)
                    WHERE user_id = ?
                    ",
                )
                .bind(password_hash)
                .bind(first_name)
                .bind(last_name)
                .bind(phone)
                .bind(avatar_url)
                .bind(id)
                .execute(pool)
                .await?;

                (EntityKind::User, res.rows_affected())
            }

            MarketplacePatch::Car { patch, .. } => {
                let CarPatch {
                    user_id,
                    description,
                    color,
                    mileage,
                    owners,
                    price,
                    vin,
                    state_number,
                } = patch.clone();

                let owner_changed = user_id.is_some();
                let price_set = price.is_some();
                let vin_set = vin.is_some();

                let res = sqlx::query(
                    r"
                    UPDATE cars
                    SET
                        user_id = COALESCE(?, user_id),
                        description = COALESCE(?, description),
                        color = COALESCE(?, color),
                        mileage = COALESCE(?, mileage),
                        owners = COALESCE(?, owners),
                        price = COALESCE(?, price),
                        vin = COALESCE(?, vin),
                        state_number = COALESCE(?, state_number)
                    WHERE car_id = ?
                    ",
                )
                .bind(user_id)
                .bind(description)
                .bind(color)
                .bind(mileage)
                .bind(owners)
                .bind(price)
                .bind(vin)
                .bind(state_number)
                .bind(id)
                .execute(pool)
                .await?;

                debug!(id, owner_changed, price_set, vin_set, "car patch fields");
                (EntityKind::Car, res.rows_affected())
            }

            MarketplacePatch::Sale { patch, .. } => {
                let SalePatch {
                    sale_price,
                    sale_date,
                } = patch.clone();

                let res = sqlx::query(
                    r"
                    UPDATE sales
                    SET
                        sale_price = COALESCE(?, sale_price),
                        sale_date = COALESCE(?, sale_date)
                    WHERE sale_id = ?
                    ",
                )
                .bind(sale_price)
                .bind(sale_date)
                .bind(id)
                .execute(pool)
                .await?;

                (EntityKind::Sale, res.rows_affected())
            }
        };

        debug!(entity = %entity, id, affected, "db patch applied");

        if affected == 0 {
            return Err(MarketplaceError::NotFound { entity, id });
        }

        Ok(())
    }
}
