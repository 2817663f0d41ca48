//! Single-writer actor for the SQLite database.
//!
//! SQLite allows one writer at a time. Instead of letting pool connections
//! race for the write lock, all mutations are sent to one background task
//! that owns a dedicated connection and executes jobs serially, each inside
//! an immediate transaction. A job that performs several statements (e.g.
//! append a transaction row and upsert the matching position) is therefore
//! atomic, and two concurrent sells against the same (user, symbol) pair
//! cannot interleave.

use std::any::Any;

use diesel::result::Error as DieselError;
use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;
use nestegg_core::errors::{Error, Result};

/// A job executed on the writer's connection. Returns a core Result so
/// repositories can surface domain errors (NotFound, UniqueViolation)
/// unchanged.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type BoxedJob = Job<Box<dyn Any + Send + 'static>>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Transaction-scoped error: either the job's own core error or a Diesel
/// failure from commit/rollback. Keeping the core error intact (instead of
/// stringifying it) preserves NotFound/UniqueViolation semantics for the
/// API layer.
enum TxError {
    Core(Error),
    Diesel(DieselError),
}

impl From<DieselError> for TxError {
    fn from(e: DieselError) -> Self {
        TxError::Diesel(e)
    }
}

impl From<TxError> for Error {
    fn from(e: TxError) -> Self {
        match e {
            TxError::Core(err) => err,
            TxError::Diesel(err) => StorageError::QueryFailed(err).into(),
        }
    }
}

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(BoxedJob, Reply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("Failed to downcast writer actor result."))
            })
    }
}

/// Spawns the writer actor and returns a handle for submitting jobs.
///
/// The actor holds one connection from the pool for its whole lifetime and
/// terminates when every `WriteHandle` has been dropped.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(BoxedJob, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, TxError, _>(|c| job(c).map_err(TxError::Core))
                .map_err(Error::from);

            // Ignore send failures: the requester may have been cancelled.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
