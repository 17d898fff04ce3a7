use std::fmt;

/// The provider services covered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Users and their API signing keys.
    Identity,
    /// Database homes and their patches.
    Database,
    /// Oracle Cloud VMware Solution.
    Ocvp,
}

impl Service {
    /// The first label of the regional endpoint host.
    pub fn host_prefix(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Database => "database",
            Self::Ocvp => "ocvps",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_prefix())
    }
}
