//! Identifier enumeration interface.
//!
//! Checks never talk to the operating system directly. They ask an
//! [`IdentifierProvider`], which reports what it finds or fails with a
//! [`ProviderError`]. An empty list is a successful enumeration that found
//! nothing; a provider must not turn a failure into an empty list.

use crate::error::ProviderResult;

/// Interface tag that marks a disk as internal. Any other tag is external.
pub const INTERFACE_IDE: &str = "IDE";

/// One disk drive as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskInfo {
    /// Interface type tag (`IDE`, `USB`, `SCSI`, ...).
    pub interface_type: String,
    /// Drive serial number, if the drive reports one.
    pub serial_number: Option<String>,
    /// Device instance path, if available.
    pub instance_path: Option<String>,
}

impl DiskInfo {
    /// Which class of check this disk participates in.
    #[must_use]
    pub fn class(&self) -> DiskClass {
        if self.interface_type == INTERFACE_IDE {
            DiskClass::Internal
        } else {
            DiskClass::External
        }
    }

    /// Returns the requested identifier, if present.
    #[must_use]
    pub fn identifier(&self, which: DiskIdentifier) -> Option<&str> {
        match which {
            DiskIdentifier::SerialNumber => self.serial_number.as_deref(),
            DiskIdentifier::InstancePath => self.instance_path.as_deref(),
        }
    }
}

/// Internal (system) or external (USB, UAS, ...) disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskClass {
    Internal,
    External,
}

/// Which disk identifier a check compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskIdentifier {
    SerialNumber,
    InstancePath,
}

/// Network adapter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Ethernet,
    Wireless,
    Loopback,
    Other,
    Unknown,
}

/// One network adapter as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAdapter {
    /// Interface name, for diagnostics only.
    pub name: String,
    /// Physical address in the provider's default rendering
    /// (12 upper-case hex digits, no separators).
    pub address: String,
    /// Whether the adapter is operationally up.
    pub is_up: bool,
    /// Adapter type.
    pub kind: AdapterKind,
}

/// Source of locally observable identifiers.
///
/// Every query is independent and may fail on its own.
pub trait IdentifierProvider: Send + Sync {
    /// All disk drives, internal and external.
    fn disks(&self) -> ProviderResult<Vec<DiskInfo>>;

    /// Serial numbers tied to the BIOS / system firmware.
    fn bios_serial_numbers(&self) -> ProviderResult<Vec<String>>;

    /// Motherboard serial numbers.
    fn baseboard_serial_numbers(&self) -> ProviderResult<Vec<String>>;

    /// Operating system installation identifiers.
    fn os_serial_numbers(&self) -> ProviderResult<Vec<String>>;

    /// All network adapters, whatever their state.
    fn network_adapters(&self) -> ProviderResult<Vec<NetworkAdapter>>;

    /// Account identifier of the current user (SID, uid, ...).
    fn current_user_id(&self) -> ProviderResult<String>;
}
