use crate::canonicalizer::TermCanonicalizer;
use crate::memory::quad_set::QuadSet;
use crate::{QuadPattern, StorageError, StoreConfig};
use rdfmem_model::{NamedOrBlankNode, Quad, TermFactory};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The shared state behind a [`Dataset`](crate::Dataset) and its [`Graph`](crate::Graph) views.
///
/// The statement set is copy-on-write: readers clone the [`Arc`] of the current set and iterate
/// it without holding the lock, while writers only copy the set if a reader still holds it. Every
/// change bumps the version counter, which allows streams to detect modifications.
#[derive(Debug)]
pub(crate) struct MemStore {
    config: StoreConfig,
    canonicalizer: TermCanonicalizer,
    content: RwLock<Arc<QuadSet>>,
    version: AtomicU64,
    closed: AtomicBool,
}

/// A consistent view of the statement set at one version.
#[derive(Clone, Debug)]
pub(crate) struct Snapshot {
    pub quads: Arc<QuadSet>,
    pub version: u64,
}

impl MemStore {
    pub fn new(config: StoreConfig) -> Self {
        let factory = if config.read_only {
            TermFactory::new_read_only()
        } else {
            TermFactory::new()
        };
        let content = QuadSet::with_capacity(config.initial_capacity);
        Self {
            config,
            canonicalizer: TermCanonicalizer::new(factory),
            content: RwLock::new(Arc::new(content)),
            version: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn canonicalizer(&self) -> &TermCanonicalizer {
        &self.canonicalizer
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    pub fn check_open(&self) -> Result<(), StorageError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StorageError::Closed);
        }
        Ok(())
    }

    pub fn check_writable(&self) -> Result<(), StorageError> {
        self.check_open()?;
        if self.config.read_only {
            return Err(StorageError::UnsupportedCapability(
                "modifying a read-only store",
            ));
        }
        Ok(())
    }

    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("Closed in-memory store");
        }
    }

    pub fn snapshot(&self) -> Result<Snapshot, StorageError> {
        self.check_open()?;
        let content = self.read();
        Ok(Snapshot {
            quads: Arc::clone(&*content),
            version: self.version(),
        })
    }

    pub fn len(&self) -> Result<usize, StorageError> {
        self.check_open()?;
        Ok(self.read().len())
    }

    pub fn graph_len(&self, graph_name: Option<&NamedOrBlankNode>) -> Result<usize, StorageError> {
        self.check_open()?;
        Ok(self.read().graph_len(graph_name))
    }

    pub fn contains(&self, quad: &Quad) -> Result<bool, StorageError> {
        self.check_open()?;
        Ok(self.read().contains(quad))
    }

    pub fn contains_pattern(&self, pattern: &QuadPattern) -> Result<bool, StorageError> {
        self.check_open()?;
        Ok(self.read().iter().any(|quad| pattern.matches(quad)))
    }

    pub fn named_graphs(&self) -> Result<Vec<NamedOrBlankNode>, StorageError> {
        self.check_open()?;
        Ok(self.read().named_graphs().cloned().collect())
    }

    /// Inserts all `quads` that are not yet part of the store. The quads must be canonical.
    pub fn insert(&self, quads: impl IntoIterator<Item = Quad>) -> Result<usize, StorageError> {
        self.check_writable()?;
        let mut content = self.write();
        let mut inserted = 0;
        for quad in quads {
            if !content.contains(&quad) {
                Arc::make_mut(&mut *content).insert(quad);
                inserted += 1;
            }
        }
        if inserted > 0 {
            self.bump_version();
        }
        Ok(inserted)
    }

    pub fn remove(&self, quad: &Quad) -> Result<bool, StorageError> {
        self.check_writable()?;
        let mut content = self.write();
        if !content.contains(quad) {
            return Ok(false);
        }
        Arc::make_mut(&mut *content).remove(quad);
        self.bump_version();
        Ok(true)
    }

    pub fn remove_pattern(&self, pattern: &QuadPattern) -> Result<usize, StorageError> {
        self.check_writable()?;
        let mut content = self.write();
        if !content.iter().any(|quad| pattern.matches(quad)) {
            return Ok(0);
        }
        let removed = Arc::make_mut(&mut *content).remove_matching(|quad| pattern.matches(quad));
        self.bump_version();
        tracing::debug!("Removed {removed} quads matching {pattern:?}");
        Ok(removed)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut content = self.write();
        if content.len() > 0 {
            match Arc::get_mut(&mut *content) {
                Some(quads) => quads.clear(),
                None => *content = Arc::default(),
            }
            self.bump_version();
        }
        tracing::debug!("Cleared in-memory store");
        Ok(())
    }

    fn bump_version(&self) {
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    // Poisoning is ignored: every mutation of the quad set completes before its guard is dropped.
    fn read(&self) -> RwLockReadGuard<'_, Arc<QuadSet>> {
        self.content.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<QuadSet>> {
        self.content.write().unwrap_or_else(PoisonError::into_inner)
    }
}
