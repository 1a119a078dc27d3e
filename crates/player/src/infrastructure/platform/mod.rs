//! Platform-specific implementations of the ports in `ports::outbound::platform`.

mod desktop;

pub use desktop::{
    DesktopRandomProvider, DesktopStorageProvider, DesktopTimeProvider, STORAGE_FILE_ENV,
};

use crate::state::Platform;

/// Desktop platform with the default storage location.
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopRandomProvider,
        DesktopStorageProvider::new(),
    )
}
