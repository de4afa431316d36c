//! Write-once memoization slots.
//!
//! A slot belongs to exactly one owning instance: embed one [`Memo`] (or
//! [`AsyncMemo`]) field per cached accessor. Distinct owners, and distinct
//! slots on the same owner, never share state. The wrapped computation runs
//! at most once per slot; a computation that fails leaves the slot empty, so
//! the next read retries it. There is no invalidation: a populated slot lives
//! exactly as long as its owner.

use std::convert::Infallible;
use std::future::Future;
use std::sync::{Mutex, OnceLock, PoisonError};

/// A write-once cache slot for a lazily computed value.
///
/// # Example
///
/// ```
/// use cachette::Memo;
///
/// struct Answer {
///     value: Memo<u64>,
/// }
///
/// let answer = Answer { value: Memo::new() };
/// assert_eq!(*answer.value.get_or_compute(|| 42), 42);
/// // The slot is populated now; the computation does not run again.
/// assert_eq!(*answer.value.get_or_compute(|| unreachable!()), 42);
/// ```
#[derive(Debug)]
pub struct Memo<T> {
    slot: OnceLock<T>,
    // serializes racing first reads so the computation runs at most once
    init: Mutex<()>,
}

impl<T> Memo<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Return the cached value, if the computation has already run.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns true once a value has been stored.
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Return the cached value, computing it on first access.
    pub fn get_or_compute<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_compute(|| Ok::<T, Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// A failed computation propagates to the caller unchanged and leaves
    /// the slot empty; a later read runs the computation again. Failures
    /// are never cached.
    pub fn get_or_try_compute<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        // double-check: another thread may have populated the slot while we
        // waited on the init lock
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.slot.get_or_init(|| value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Async flavor of [`Memo`] for computations that await.
///
/// The slot's mutex is held across the compute future, so concurrent first
/// reads still invoke the computation at most once. Values are returned by
/// clone because the lock guard cannot outlive the call.
///
/// ```
/// use cachette::AsyncMemo;
///
/// # async fn demo() -> Result<(), &'static str> {
/// let memo = AsyncMemo::new();
/// let value: u32 = memo.get_or_try_compute(|| async { Ok::<u32, &'static str>(7) }).await?;
/// assert_eq!(value, 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncMemo<T> {
    slot: tokio::sync::Mutex<Option<T>>,
}

impl<T> AsyncMemo<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: tokio::sync::Mutex::new(None),
        }
    }

    /// Returns true once a value has been stored.
    pub async fn is_computed(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

impl<T: Clone> AsyncMemo<T> {
    /// Return the cached value, if the computation has already run.
    pub async fn get(&self) -> Option<T> {
        self.slot.lock().await.clone()
    }

    /// Return the cached value, computing (and awaiting) it on first access.
    ///
    /// Same contract as [`Memo::get_or_try_compute`]: a failed computation
    /// propagates unchanged, the slot stays empty, and the next read retries.
    pub async fn get_or_try_compute<F, Fut, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(value) = slot.as_ref() {
            return Ok(value.clone());
        }
        let value = f().await?;
        *slot = Some(value.clone());
        Ok(value)
    }
}

impl<T> Default for AsyncMemo<T> {
    fn default() -> Self {
        Self::new()
    }
}
