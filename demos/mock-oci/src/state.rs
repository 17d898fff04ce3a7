use std::time::{Duration, Instant};

use anyhow::Context;

use crate::database::PatchRepository;
use crate::identity::ApiKeyRepository;
use crate::journal::Journal;
use crate::ocvp::VersionRepository;

/// The application state
#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    #[from_ref(skip)]
    started_at: Instant,
    api_keys: ApiKeyRepository,
    patches: PatchRepository,
    versions: VersionRepository,
    journal: Journal,
}

impl AppState {
    /// Create a state with the seeded resources
    ///
    /// # Errors
    ///
    /// Fail if the seed data cannot be read
    pub fn new() -> anyhow::Result<Self> {
        let started_at = Instant::now();
        let patches = PatchRepository::new().context("seeding DB home patches")?;
        let versions = VersionRepository::new().context("seeding VMware versions")?;

        Ok(Self {
            started_at,
            api_keys: ApiKeyRepository::default(),
            patches,
            versions,
            journal: Journal::default(),
        })
    }
}

impl AppState {
    pub(crate) fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub(crate) fn journal(&self) -> Journal {
        self.journal.clone()
    }
}
