use crate::db::models::{DbBrand, DbCar, DbModel, DbPhoto, DbSale, DbUser, EntityKind};
use crate::db::patch::{MarketplaceCreate, MarketplacePatch};
use crate::db::pool::connect;
use crate::db::queries::{self, cars, catalog, photos, sales, users};
use crate::db::schema::apply_schema;
use crate::error::MarketplaceError;
use crate::patches::DbPatchable;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use tracing::{debug, info};

type Reply<T> = RpcReplyPort<Result<T, MarketplaceError>>;

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a record and return its id.
    Create(MarketplaceCreate, Reply<i64>),

    /// Patch a record by id.
    Patch(MarketplacePatch, Reply<()>),

    /// Delete a record by id (no cascade).
    Delete(EntityKind, i64, Reply<()>),

    GetUser(i64, Reply<DbUser>),
    GetBrand(i64, Reply<DbBrand>),
    GetModel(i64, Reply<DbModel>),
    GetCar(i64, Reply<DbCar>),
    GetSale(i64, Reply<DbSale>),
    GetPhoto(i64, Reply<DbPhoto>),

    FindUserByLogin(String, Reply<Option<DbUser>>),
    FindBrandByName(String, Reply<Option<DbBrand>>),
    FindCarByVin(String, Reply<Option<DbCar>>),

    /// Cars owned by a user.
    CarsOfUser(i64, Reply<Vec<DbCar>>),
    /// Sales where the user is the seller.
    SalesSoldBy(i64, Reply<Vec<DbSale>>),
    /// Sales where the user is the buyer.
    SalesBoughtBy(i64, Reply<Vec<DbSale>>),
    ModelsOfBrand(i64, Reply<Vec<DbModel>>),
    CarsOfBrand(i64, Reply<Vec<DbCar>>),
    CarsOfModel(i64, Reply<Vec<DbCar>>),
    /// The sale of a car, if any.
    SaleOfCar(i64, Reply<Option<DbSale>>),
    PhotosOfCar(i64, Reply<Vec<DbPhoto>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

macro_rules! rpc {
    ($actor:expr, $variant:ident, $name:literal $(, $arg:expr)*) => {
        ractor::call!($actor, DbActorMessage::$variant $(, $arg)*).map_err(|e| {
            MarketplaceError::RactorError(format!(concat!("DbActor ", $name, " RPC failed: {}"), e))
        })?
    };
}

impl DbActorHandle {
    pub async fn create(&self, create: MarketplaceCreate) -> Result<i64, MarketplaceError> {
        rpc!(self.actor, Create, "Create", create)
    }

    pub async fn patch(&self, patch: MarketplacePatch) -> Result<(), MarketplaceError> {
        rpc!(self.actor, Patch, "Patch", patch)
    }

    pub async fn delete(&self, entity: EntityKind, id: i64) -> Result<(), MarketplaceError> {
        rpc!(self.actor, Delete, "Delete", entity, id)
    }

    pub async fn get_user(&self, id: i64) -> Result<DbUser, MarketplaceError> {
        rpc!(self.actor, GetUser, "GetUser", id)
    }

    pub async fn get_brand(&self, id: i64) -> Result<DbBrand, MarketplaceError> {
        rpc!(self.actor, GetBrand, "GetBrand", id)
    }

    pub async fn get_model(&self, id: i64) -> Result<DbModel, MarketplaceError> {
        rpc!(self.actor, GetModel, "GetModel", id)
    }

    pub async fn get_car(&self, id: i64) -> Result<DbCar, MarketplaceError> {
        rpc!(self.actor, GetCar, "GetCar", id)
    }

    pub async fn get_sale(&self, id: i64) -> Result<DbSale, MarketplaceError> {
        rpc!(self.actor, GetSale, "GetSale", id)
    }

    pub async fn get_photo(&self, id: i64) -> Result<DbPhoto, MarketplaceError> {
        rpc!(self.actor, GetPhoto, "GetPhoto", id)
    }

    pub async fn find_user_by_login(
        &self,
        login: impl Into<String>,
    ) -> Result<Option<DbUser>, MarketplaceError> {
        rpc!(self.actor, FindUserByLogin, "FindUserByLogin", login.into())
    }

    pub async fn find_brand_by_name(
        &self,
        name: impl Into<String>,
    ) -> Result<Option<DbBrand>, MarketplaceError> {
        rpc!(self.actor, FindBrandByName, "FindBrandByName", name.into())
    }

    pub async fn find_car_by_vin(
        &self,
        vin: impl Into<String>,
    ) -> Result<Option<DbCar>, MarketplaceError> {
        rpc!(self.actor, FindCarByVin, "FindCarByVin", vin.into())
    }

    pub async fn cars_of_user(&self, user_id: i64) -> Result<Vec<DbCar>, MarketplaceError> {
        rpc!(self.actor, CarsOfUser, "CarsOfUser", user_id)
    }

    pub async fn sales_sold_by(&self, user_id: i64) -> Result<Vec<DbSale>, MarketplaceError> {
        rpc!(self.actor, SalesSoldBy, "SalesSoldBy", user_id)
    }

    pub async fn sales_bought_by(&self, user_id: i64) -> Result<Vec<DbSale>, MarketplaceError> {
        rpc!(self.actor, SalesBoughtBy, "SalesBoughtBy", user_id)
    }

    pub async fn models_of_brand(&self, brand_id: i64) -> Result<Vec<DbModel>, MarketplaceError> {
        rpc!(self.actor, ModelsOfBrand, "ModelsOfBrand", brand_id)
    }

    pub async fn cars_of_brand(&self, brand_id: i64) -> Result<Vec<DbCar>, MarketplaceError> {
        rpc!(self.actor, CarsOfBrand, "CarsOfBrand", brand_id)
    }

    pub async fn cars_of_model(&self, model_id: i64) -> Result<Vec<DbCar>, MarketplaceError> {
        rpc!(self.actor, CarsOfModel, "CarsOfModel", model_id)
    }

    pub async fn sale_of_car(&self, car_id: i64) -> Result<Option<DbSale>, MarketplaceError> {
        rpc!(self.actor, SaleOfCar, "SaleOfCar", car_id)
    }

    pub async fn photos_of_car(&self, car_id: i64) -> Result<Vec<DbPhoto>, MarketplaceError> {
        rpc!(self.actor, PhotosOfCar, "PhotosOfCar", car_id)
    }

    /// Stops the actor and waits for `post_stop`, so the pool is closed on return.
    pub async fn stop(&self) -> Result<(), MarketplaceError> {
        self.actor
            .stop_and_wait(None, None)
            .await
            .map_err(|e| MarketplaceError::RactorError(format!("DbActor stop failed: {e}")))
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let pool = connect(&database_url)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        state.pool.close().await;
        info!("DbActor stopped");
        Ok(())
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        let pool = &state.pool;
        match message {
            DbActorMessage::Create(create, reply) => {
                let _ = reply.send(create_record(pool, create).await);
            }
            DbActorMessage::Patch(patch, reply) => {
                let _ = reply.send(patch.apply_patch(pool).await);
            }
            DbActorMessage::Delete(entity, id, reply) => {
                let _ = reply.send(queries::delete(pool, entity, id).await);
            }
            DbActorMessage::GetUser(id, reply) => {
                let _ = reply.send(users::get_user(pool, id).await);
            }
            DbActorMessage::GetBrand(id, reply) => {
                let _ = reply.send(catalog::get_brand(pool, id).await);
            }
            DbActorMessage::GetModel(id, reply) => {
                let _ = reply.send(catalog::get_model(pool, id).await);
            }
            DbActorMessage::GetCar(id, reply) => {
                let _ = reply.send(cars::get_car(pool, id).await);
            }
            DbActorMessage::GetSale(id, reply) => {
                let _ = reply.send(sales::get_sale(pool, id).await);
            }
            DbActorMessage::GetPhoto(id, reply) => {
                let _ = reply.send(photos::get_photo(pool, id).await);
            }
            DbActorMessage::FindUserByLogin(login, reply) => {
                let _ = reply.send(users::find_user_by_login(pool, &login).await);
            }
            DbActorMessage::FindBrandByName(name, reply) => {
                let _ = reply.send(catalog::find_brand_by_name(pool, &name).await);
            }
            DbActorMessage::FindCarByVin(vin, reply) => {
                let _ = reply.send(cars::find_car_by_vin(pool, &vin).await);
            }
            DbActorMessage::CarsOfUser(id, reply) => {
                let _ = reply.send(cars::cars_of_user(pool, id).await);
            }
            DbActorMessage::SalesSoldBy(id, reply) => {
                let _ = reply.send(sales::sales_sold_by(pool, id).await);
            }
            DbActorMessage::SalesBoughtBy(id, reply) => {
                let _ = reply.send(sales::sales_bought_by(pool, id).await);
            }
            DbActorMessage::ModelsOfBrand(id, reply) => {
                let _ = reply.send(catalog::models_of_brand(pool, id).await);
            }
            DbActorMessage::CarsOfBrand(id, reply) => {
                let _ = reply.send(cars::cars_of_brand(pool, id).await);
            }
            DbActorMessage::CarsOfModel(id, reply) => {
                let _ = reply.send(cars::cars_of_model(pool, id).await);
            }
            DbActorMessage::SaleOfCar(id, reply) => {
                let _ = reply.send(sales::sale_of_car(pool, id).await);
            }
            DbActorMessage::PhotosOfCar(id, reply) => {
                let _ = reply.send(photos::photos_of_car(pool, id).await);
            }
        }
        Ok(())
    }
}

async fn create_record(
    pool: &SqlitePool,
    create: MarketplaceCreate,
) -> Result<i64, MarketplaceError> {
    let (table, res) = match create {
        MarketplaceCreate::User(c) => ("users", users::create_user(pool, c).await),
        MarketplaceCreate::Brand(c) => ("brands", catalog::create_brand(pool, c).await),
        MarketplaceCreate::Model(c) => ("models", catalog::create_model(pool, c).await),
        MarketplaceCreate::Car(c) => ("cars", cars::create_car(pool, c).await),
        MarketplaceCreate::Sale(c) => ("sales", sales::create_sale(pool, c).await),
        MarketplaceCreate::Photo(c) => ("photos", photos::create_photo(pool, c).await),
    };

    match &res {
        Ok(id) => debug!(table, id, "db insert applied"),
        Err(e) => debug!(table, error = %e, "db insert rejected"),
    }
    res
}

/// Spawn the database actor and return a cloneable handle.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, MarketplaceError> {
    // Unnamed: several handles may coexist in one process (e.g. tests).
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| MarketplaceError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}
