//! In-memory vote store.
//!
//! The store owns a fixed set of canonical tool names and one counter per
//! name. Names are resolved case-insensitively through an index that is
//! built once at construction and never mutated, so resolution needs no
//! lock. Counts live behind a single `RwLock`: reads share it, a vote takes
//! it exclusively for its read-modify-write.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use tracing::{debug, info};

use super::error::VoteError;
use super::registry;

/// A tool's canonical name together with its current vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolTally {
    /// Canonical tool name.
    pub tool: String,

    /// Vote count at the time of the read (or right after the increment).
    pub votes: u64,
}

/// Concurrent store of vote counts keyed by canonical tool name.
#[derive(Debug)]
pub struct VoteStore {
    /// Canonical names in registration order.
    names: Vec<String>,

    /// Lowercased name -> canonical name.
    index: HashMap<String, String>,

    /// Canonical name -> count.
    counts: RwLock<BTreeMap<String, u64>>,
}

impl VoteStore {
    /// Build a store from the given canonical names, all counts at zero.
    ///
    /// Fails if a name is blank or if two names differ only in case.
    pub fn new<I, S>(names: I) -> Result<Self, VoteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut canonical = Vec::new();
        let mut index: HashMap<String, String> = HashMap::new();

        for name in names {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(VoteError::invalid_name(name));
            }

            let key = name.to_lowercase();
            if let Some(existing) = index.get(&key) {
                return Err(VoteError::duplicate(name, existing.clone()));
            }

            index.insert(key, name.clone());
            canonical.push(name);
        }

        let counts = canonical.iter().map(|name| (name.clone(), 0)).collect();

        info!("Vote store initialized with {} tools", canonical.len());

        Ok(Self {
            names: canonical,
            index,
            counts: RwLock::new(counts),
        })
    }

    /// Build a store seeded with the default tool registry.
    pub fn with_defaults() -> Result<Self, VoteError> {
        Self::new(registry::DEFAULT_TOOLS.iter().copied())
    }

    /// Canonical names in registration order.
    pub fn tool_names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve any casing of a tool name to its canonical form.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.index.get(&input.to_lowercase()).map(String::as_str)
    }

    /// Snapshot of every tool and its current count.
    pub fn list(&self) -> Result<BTreeMap<String, u64>, VoteError> {
        let counts = self.counts.read().map_err(|_| VoteError::LockPoisoned)?;
        Ok(counts.clone())
    }

    /// Current count for the tool matching `input`.
    pub fn lookup(&self, input: &str) -> Result<ToolTally, VoteError> {
        let tool = self
            .resolve(input)
            .ok_or_else(|| VoteError::not_found(input))?;

        let counts = self.counts.read().map_err(|_| VoteError::LockPoisoned)?;
        let votes = counts.get(tool).copied().unwrap_or_default();

        Ok(ToolTally {
            tool: tool.to_string(),
            votes,
        })
    }

    /// Add exactly one vote to the tool matching `input`.
    ///
    /// Returns the canonical name and the count after the increment.
    /// An unknown name leaves every count untouched.
    pub fn vote(&self, input: &str) -> Result<ToolTally, VoteError> {
        let tool = self
            .resolve(input)
            .ok_or_else(|| VoteError::not_found(input))?;

        let votes = {
            let mut counts = self.counts.write().map_err(|_| VoteError::LockPoisoned)?;
            let entry = counts.entry(tool.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };

        info!(tool = %tool, votes, "Vote received");

        Ok(ToolTally {
            tool: tool.to_string(),
            votes,
        })
    }

    /// Sum of all counts.
    pub fn total_votes(&self) -> Result<u64, VoteError> {
        let counts = self.counts.read().map_err(|_| VoteError::LockPoisoned)?;
        Ok(counts.values().sum())
    }

    /// Whether the count lock can still be acquired.
    pub fn is_healthy(&self) -> bool {
        let healthy = !self.counts.is_poisoned();
        if !healthy {
            debug!("Vote store lock is poisoned");
        }
        healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store() -> VoteStore {
        VoteStore::with_defaults().unwrap()
    }

    #[test]
    fn test_list_starts_at_zero() {
        let store = store();
        let snapshot = store.list().unwrap();

        assert_eq!(snapshot.len(), registry::DEFAULT_TOOLS.len());
        for name in registry::DEFAULT_TOOLS {
            assert_eq!(snapshot.get(*name), Some(&0));
        }
    }

    #[test]
    fn test_resolve_any_casing() {
        let store = store();
        assert_eq!(store.resolve("docker"), Some("Docker"));
        assert_eq!(store.resolve("DOCKER"), Some("Docker"));
        assert_eq!(store.resolve("Docker"), Some("Docker"));
        assert_eq!(store.resolve("visual_STUDIO"), Some("Visual_studio"));
        assert_eq!(store.resolve("Kubernetes"), None);
        assert_eq!(store.resolve(""), None);
    }

    #[test]
    fn test_lookup_and_vote_share_canonical_entry() {
        let store = store();

        assert_eq!(store.vote("git").unwrap().tool, "Git");
        assert_eq!(store.vote("GIT").unwrap().votes, 2);

        let tally = store.lookup("gIt").unwrap();
        assert_eq!(
            tally,
            ToolTally {
                tool: "Git".to_string(),
                votes: 2
            }
        );
    }

    #[test]
    fn test_unknown_tool_not_found() {
        let store = store();

        assert_eq!(
            store.lookup("Kubernetes"),
            Err(VoteError::NotFound("Kubernetes".to_string()))
        );
        assert_eq!(
            store.vote("kubernetes"),
            Err(VoteError::NotFound("kubernetes".to_string()))
        );
        assert_eq!(store.total_votes().unwrap(), 0);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let store = store();
        store.vote("Jenkins").unwrap();

        assert_eq!(store.list().unwrap(), store.list().unwrap());
        assert_eq!(store.lookup("jenkins"), store.lookup("jenkins"));
        assert_eq!(store.lookup("jenkins").unwrap().votes, 1);
    }

    #[test]
    fn test_votes_are_monotonic_per_tool() {
        let store = store();
        let before = store.lookup("Ansible").unwrap().votes;

        for _ in 0..5 {
            store.vote("ansible").unwrap();
            store.vote("Prometheus").unwrap();
        }

        assert_eq!(store.lookup("Ansible").unwrap().votes, before + 5);
        assert_eq!(store.lookup("Prometheus").unwrap().votes, 5);
        assert_eq!(store.lookup("Docker").unwrap().votes, 0);
        assert_eq!(store.total_votes().unwrap(), 10);
    }

    #[test]
    fn test_concurrent_votes_are_not_lost() {
        let store = store();
        let threads = 16;
        let per_thread = 250;

        std::thread::scope(|scope| {
            for i in 0..threads {
                let store = &store;
                scope.spawn(move || {
                    let name = if i % 2 == 0 { "docker" } else { "DOCKER" };
                    for _ in 0..per_thread {
                        store.vote(name).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.lookup("Docker").unwrap().votes, threads * per_thread);
    }

    #[test]
    fn test_custom_tool_set() {
        let store = VoteStore::new(["Terraform", "Helm"]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.tool_names(), ["Terraform", "Helm"]);
        assert!(store.lookup("Docker").is_err());
        assert_eq!(store.resolve("HELM"), Some("Helm"));
    }

    #[test]
    fn test_empty_tool_set() {
        let store = VoteStore::new(Vec::<String>::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_case_insensitive_duplicates() {
        let err = VoteStore::new(["Docker", "docker"]).unwrap_err();
        assert_eq!(
            err,
            VoteError::DuplicateTool("docker".to_string(), "Docker".to_string())
        );
    }

    #[test]
    fn test_rejects_blank_names() {
        let err = VoteStore::new(["Docker", "  "]).unwrap_err();
        assert!(matches!(err, VoteError::InvalidToolName(_)));
    }

    #[test]
    fn test_poisoned_lock_reports_error() {
        let store = Arc::new(store());
        let poisoner = Arc::clone(&store);

        let result = std::thread::spawn(move || {
            let _guard = poisoner.counts.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());

        assert!(!store.is_healthy());
        assert_eq!(store.vote("Docker"), Err(VoteError::LockPoisoned));
        assert_eq!(store.list(), Err(VoteError::LockPoisoned));
        // Unknown names are rejected before the lock is touched.
        assert!(store.lookup("Kubernetes").unwrap_err().is_not_found());
    }
}
