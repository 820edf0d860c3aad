use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::PgConnection;

type R2D2PooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub enum ConnectionType {
    Pg(PgConnection),
    R2D2(R2D2PooledConnection),
}
