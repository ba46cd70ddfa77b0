mod roster_storage_port;

pub use roster_storage_port::RosterStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::roster_storage_port::MockRosterStoragePort;
}
