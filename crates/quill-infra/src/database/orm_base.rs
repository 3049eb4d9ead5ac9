use std::marker::PhantomData;

use sea_orm::{DbConn, EntityTrait};

/// Generic SeaORM repository handle. The port implementations hang off
/// entity-specific aliases of this.
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}
