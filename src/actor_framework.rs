use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait, errors, id sequences)
// =============================================================================

/// Trait that any stored record must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;

    /// Human readable name used in store errors, e.g. "order".
    const KIND: &'static str;

    /// Get the ID of the record
    fn id(&self) -> &Self::Id;

    /// Construct the full record from a freshly allocated ID and its parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;
}

/// Failures reported by a keyed store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: &'static str, id: String },
    #[error("no {kind} found for {query}")]
    NoMatches { kind: &'static str, query: String },
    #[error("{kind} storage is full (capacity {capacity})")]
    CapacityExceeded { kind: &'static str, capacity: usize },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl StoreError {
    pub fn not_found<T: Entity>(id: &T::Id) -> Self {
        StoreError::NotFound { kind: T::KIND, id: id.to_string() }
    }

    pub fn already_exists<T: Entity>(id: &T::Id) -> Self {
        StoreError::AlreadyExists { kind: T::KIND, id: id.to_string() }
    }
}

/// Monotonic, shareable integer id source. Never yields 0.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Arc<AtomicI64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self { next: Arc::new(AtomicI64::new(first.max(1))) }
    }

    pub fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Predicate evaluated inside the actor for `List` requests.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    /// Allocate an id and store a new record.
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    /// Store a record whose id was assigned by the caller.
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Replace an existing record.
    Update {
        item: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    /// All records matching the filter, ascending by id.
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    capacity: Option<usize>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
            capacity: None,
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Bound the number of records; further creates fail with `CapacityExceeded`.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    fn check_capacity(&self) -> Result<(), StoreError> {
        match self.capacity {
            Some(capacity) if self.store.len() >= capacity => {
                warn!(kind = T::KIND, capacity, "Store is full");
                Err(StoreError::CapacityExceeded { kind: T::KIND, capacity })
            }
            _ => Ok(()),
        }
    }

    pub async fn run(mut self) {
        debug!(kind = T::KIND, "Store actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    if let Err(e) = self.check_capacity() {
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    let id = (self.next_id_fn)();
                    let item = T::from_create_params(id.clone(), params);
                    self.store.insert(id, item.clone());
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Insert { item, respond_to } => {
                    if self.store.contains_key(item.id()) {
                        let _ = respond_to.send(Err(StoreError::already_exists::<T>(item.id())));
                        continue;
                    }
                    if let Err(e) = self.check_capacity() {
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    self.store.insert(item.id().clone(), item.clone());
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { item, respond_to } => {
                    if let Some(existing) = self.store.get_mut(item.id()) {
                        *existing = item.clone();
                        let _ = respond_to.send(Ok(item));
                    } else {
                        let _ = respond_to.send(Err(StoreError::not_found::<T>(item.id())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    if self.store.remove(&id).is_some() {
                        let _ = respond_to.send(Ok(()));
                    } else {
                        let _ = respond_to.send(Err(StoreError::not_found::<T>(&id)));
                    }
                }
                ResourceRequest::List { filter, respond_to } => {
                    let mut items: Vec<T> = self.store.values().filter(|item| filter(item)).cloned().collect();
                    items.sort_by(|a, b| a.id().cmp(b.id()));
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        debug!(kind = T::KIND, "Store actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;
        response.await.map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn insert(&self, item: T) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Insert { item, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, item: T) -> Result<T, StoreError> {
        self.request(|respond_to| ResourceRequest::Update { item, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn list(&self, filter: impl Fn(&T) -> bool + Send + Sync + 'static) -> Result<Vec<T>, StoreError> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::List { filter, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
