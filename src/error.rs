use thiserror::Error;

use crate::host::MountTarget;
use crate::styles::StyleError;

/// Failures raised by a [`Host`](crate::host::Host) while attaching an application.
#[derive(Debug, Error)]
pub enum MountError {
    /// The host has no element carrying the target id. Fatal for startup.
    #[error("mount target `{0}` does not exist in the host document")]
    MountTargetMissing(MountTarget),
    #[error("mount target `{0}` is already bound to an application")]
    MountTargetOccupied(MountTarget),
    #[error("host failed to attach `{target}`")]
    Backend {
        target: MountTarget,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid mount target `{0}`")]
    InvalidMountTarget(String),
    #[error("stylesheet failed to load")]
    Stylesheet(#[from] StyleError),
    #[error(transparent)]
    Mount(#[from] MountError),
}
