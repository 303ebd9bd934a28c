use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::holdings;

use super::holdings_errors::{HoldingError, Result};
use super::holdings_model::{Holding, HoldingDB, HoldingUpdate, NewHolding};
use super::holdings_traits::HoldingRepositoryTrait;

/// Repository for managing holding records in the database
pub struct HoldingRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl HoldingRepository {
    /// Creates a new HoldingRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn connection(&self) -> Result<crate::db::DbConnection> {
        get_connection(&self.pool).map_err(|e| HoldingError::DatabaseError(e.to_string()))
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    /// Creates a new holding in the database, assigning its id
    fn create(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;

        let mut holding_db: HoldingDB = new_holding.into();
        holding_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = self.connection()?;

        diesel::insert_into(holdings::table)
            .values(&holding_db)
            .execute(&mut conn)?;

        debug!("Created holding {} ({})", holding_db.id, holding_db.symbol);

        holding_db.try_into()
    }

    /// Retrieves a holding by its ID
    fn get_by_id(&self, holding_id: &str) -> Result<Holding> {
        let mut conn = self.connection()?;

        let holding_db = holdings::table
            .find(holding_id)
            .first::<HoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    HoldingError::NotFound(format!("Holding with id {} not found", holding_id))
                }
                _ => HoldingError::DatabaseError(e.to_string()),
            })?;

        holding_db.try_into()
    }

    /// Lists all holdings in creation order
    fn list(&self) -> Result<Vec<Holding>> {
        let mut conn = self.connection()?;

        let results = holdings::table
            .order((holdings::created_at.asc(), holdings::id.asc()))
            .load::<HoldingDB>(&mut conn)?;

        results.into_iter().map(Holding::try_from).collect()
    }

    /// Updates the descriptive fields of an existing holding
    fn update(&self, holding_update: HoldingUpdate) -> Result<Holding> {
        holding_update.validate()?;

        let mut conn = self.connection()?;
        let now = Utc::now().naive_utc();

        let holding_db = diesel::update(holdings::table.find(&holding_update.id))
            .set((
                holdings::symbol.eq(holding_update.symbol.trim().to_uppercase()),
                holdings::asset_name.eq(holding_update.asset_name.trim()),
                holdings::asset_type.eq(holding_update.asset_type.as_str()),
                holdings::quantity.eq(holding_update.quantity.to_string()),
                holdings::purchase_price.eq(holding_update.purchase_price.to_string()),
                holdings::purchase_date.eq(holding_update.purchase_date),
                holdings::updated_at.eq(now),
            ))
            .get_result::<HoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => HoldingError::NotFound(format!(
                    "Holding with id {} not found",
                    holding_update.id
                )),
                _ => HoldingError::DatabaseError(e.to_string()),
            })?;

        holding_db.try_into()
    }

    /// Records a price snapshot for a holding
    fn update_price(&self, holding_id: &str, price: Decimal) -> Result<Holding> {
        let mut conn = self.connection()?;
        let now = Utc::now().naive_utc();

        let holding_db = diesel::update(holdings::table.find(holding_id))
            .set((
                holdings::current_price.eq(Some(price.to_string())),
                holdings::last_price_update.eq(Some(now)),
                holdings::updated_at.eq(now),
            ))
            .get_result::<HoldingDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    HoldingError::NotFound(format!("Holding with id {} not found", holding_id))
                }
                _ => HoldingError::DatabaseError(e.to_string()),
            })?;

        debug!("Updated price for holding {}", holding_id);

        holding_db.try_into()
    }

    /// Deletes a holding by its ID and returns the number of deleted records
    fn delete(&self, holding_id: &str) -> Result<usize> {
        let mut conn = self.connection()?;

        let affected = diesel::delete(holdings::table.find(holding_id))
            .execute(&mut conn)
            .map_err(|e| HoldingError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(HoldingError::NotFound(format!(
                "Holding with id {} not found",
                holding_id
            )));
        }

        Ok(affected)
    }
}
