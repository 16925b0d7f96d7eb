// SPDX-License-Identifier: MIT
// Thread coordinator: fixed worker set per phase, scoped spawn/join,
// cancel-and-join rollback on partial launch failure, reusable row barrier.

use std::io;
use std::sync::Barrier;
use std::thread::{self, Scope, ScopedJoinHandle};

use parking_lot::{Condvar, Mutex};
use tracing::warn;

use crate::error::{LevenError, Result};

/// Spawn seam so tests can inject deterministic launch failures.
pub(crate) trait Spawner: Sync {
    fn spawn<'scope, F>(
        &'scope self,
        scope: &'scope Scope<'scope, '_>,
        name: String,
        f: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope;
}

/// Production spawner backed by `thread::Builder`.
pub(crate) struct OsSpawner;

impl Spawner for OsSpawner {
    fn spawn<'scope, F>(
        &'scope self,
        scope: &'scope Scope<'scope, '_>,
        name: String,
        f: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope,
    {
        thread::Builder::new().name(name).spawn_scoped(scope, f)
    }
}

enum GateState {
    Hold,
    Open,
    Cancelled,
}

/// Holds freshly spawned workers until the whole set is known to have
/// launched. A launch failure cancels the set before any worker has touched
/// the tables or the barrier, so rollback is a plain join.
struct StartGate {
    state: Mutex<GateState>,
    cvar: Condvar,
}

impl StartGate {
    fn new() -> Self {
        StartGate { state: Mutex::new(GateState::Hold), cvar: Condvar::new() }
    }

    /// Returns true when the worker may proceed, false when cancelled.
    fn wait(&self) -> bool {
        let mut state = self.state.lock();
        while matches!(*state, GateState::Hold) {
            self.cvar.wait(&mut state);
        }
        matches!(*state, GateState::Open)
    }

    fn open(&self) {
        *self.state.lock() = GateState::Open;
        self.cvar.notify_all();
    }

    fn cancel(&self) {
        *self.state.lock() = GateState::Cancelled;
        self.cvar.notify_all();
    }
}

/// Reusable row-rendezvous barrier. `std::sync::Barrier` is cyclic, so one
/// instance serves every row of the fill phase.
pub(crate) struct Rendezvous {
    inner: Barrier,
}

impl Rendezvous {
    pub(crate) fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(LevenError::Barrier("rendezvous size must be non-zero"));
        }
        Ok(Rendezvous { inner: Barrier::new(count) })
    }

    #[inline]
    pub(crate) fn wait(&self) {
        self.inner.wait();
    }
}

/// Launches `workers` threads, each running `routine(worker_id)`, and joins
/// them all. If a launch fails partway, the already-launched workers are
/// cancelled at the start gate and joined before the failure is returned, so
/// no thread outlives the call on any path.
pub(crate) fn dispatch<F>(workers: usize, routine: F) -> Result<()>
where
    F: Fn(usize) + Send + Sync,
{
    dispatch_with(&OsSpawner, workers, routine)
}

pub(crate) fn dispatch_with<S, F>(spawner: &S, workers: usize, routine: F) -> Result<()>
where
    S: Spawner,
    F: Fn(usize) + Send + Sync,
{
    let gate = StartGate::new();
    let routine = &routine;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let gate = &gate;
            let spawned = spawner.spawn(scope, format!("leven-worker-{id}"), move || {
                if gate.wait() {
                    routine(id);
                }
            });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    gate.cancel();
                    let launched = handles.len();
                    for handle in handles {
                        let _ = handle.join();
                    }
                    warn!(launched, "worker launch failed, cancelled partial set");
                    return Err(LevenError::WorkerLaunch(err));
                }
            }
        }

        gate.open();
        let mut panicked = 0;
        for handle in handles {
            if handle.join().is_err() {
                panicked += 1;
            }
        }
        if panicked > 0 {
            warn!(panicked, "worker(s) panicked before join");
            return Err(LevenError::WorkerPanic(panicked));
        }
        Ok(())
    })
}
