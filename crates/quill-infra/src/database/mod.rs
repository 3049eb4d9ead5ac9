//! Database connection management and SeaORM-backed repositories.

mod connections;
mod orm_base;
mod orm_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use orm_base::SeaOrmRepository;
pub use orm_repo::{SeaOrmGroupRepository, SeaOrmPostRepository, SeaOrmUserRepository};
pub use sea_orm::DbConn;
