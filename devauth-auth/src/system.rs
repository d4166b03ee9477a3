//! Identifier provider for the local machine.
//!
//! On Linux identifiers come from sysfs and procfs:
//!
//! | Query                 | Source                                             |
//! |-----------------------|----------------------------------------------------|
//! | BIOS serial           | `/sys/class/dmi/id/product_serial`                 |
//! | baseboard serial      | `/sys/class/dmi/id/board_serial`                   |
//! | OS serial             | `/etc/machine-id`, `/var/lib/dbus/machine-id`      |
//! | disks                 | `/sys/block/*/device/{serial,wwid,vendor,model}`   |
//! | network adapters      | `/sys/class/net/*/{address,operstate,flags,type}`  |
//! | current user          | real uid from `/proc/self/status`                  |
//!
//! DMI serials are usually readable by root only; a permission error is
//! reported as [`ProviderError::Unavailable`], never as an empty list.
//!
//! Other platforms report every query as [`ProviderError::Unsupported`].

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{DiskInfo, IdentifierProvider, NetworkAdapter};
use std::path::{Path, PathBuf};

/// Reads identifiers from the running system.
#[derive(Debug, Clone)]
pub struct SystemProvider {
    root: PathBuf,
}

impl SystemProvider {
    /// Provider over the live filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Provider that resolves every system path under `root` instead of `/`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem root used for lookups.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use crate::provider::{AdapterKind, INTERFACE_IDE};
    use std::fs;

    const ARPHRD_ETHER: u32 = 1;
    const ARPHRD_LOOPBACK: u32 = 772;
    const IFF_UP: u32 = 0x1;

    /// Block devices that are not disk drives.
    const VIRTUAL_BLOCK_PREFIXES: [&str; 7] = ["loop", "ram", "zram", "dm-", "md", "sr", "fd"];

    pub(super) fn read_value(path: &Path, resource: &'static str) -> ProviderResult<String> {
        fs::read_to_string(path)
            .map(|s| s.trim().to_string())
            .map_err(|e| ProviderError::unavailable(resource, format!("{}: {e}", path.display())))
    }

    fn read_optional(path: &Path) -> Option<String> {
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub(super) fn single_value(
        root: &Path,
        rel: &str,
        resource: &'static str,
    ) -> ProviderResult<Vec<String>> {
        read_value(&root.join(rel), resource).map(|v| vec![v])
    }

    pub(super) fn machine_id(root: &Path) -> ProviderResult<Vec<String>> {
        read_value(&root.join("etc/machine-id"), "OS serial number")
            .or_else(|_| read_value(&root.join("var/lib/dbus/machine-id"), "OS serial number"))
            .map(|v| vec![v])
    }

    pub(super) fn disks(root: &Path) -> ProviderResult<Vec<DiskInfo>> {
        let block = root.join("sys/block");
        let entries =
            fs::read_dir(&block).map_err(|e| ProviderError::unavailable("disk drives", e))?;

        let mut disks = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ProviderError::unavailable("disk drives", e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if VIRTUAL_BLOCK_PREFIXES.iter().any(|p| name.starts_with(p)) {
                continue;
            }

            let dev = entry.path();
            let device = dev.join("device");
            let serial = read_optional(&device.join("serial"))
                .or_else(|| read_optional(&device.join("wwid")));
            let vendor = read_optional(&device.join("vendor")).unwrap_or_default();
            let model = read_optional(&device.join("model")).unwrap_or_default();
            let instance_path = serial.as_ref().map(|s| format!("{vendor}/{model}/{s}"));

            disks.push(DiskInfo {
                interface_type: interface_type(&dev),
                serial_number: serial,
                instance_path,
            });
        }
        disks.sort_by(|a, b| a.instance_path.cmp(&b.instance_path));
        Ok(disks)
    }

    /// Removable or USB-attached drives are external; everything else gets
    /// the internal tag.
    fn interface_type(dev: &Path) -> String {
        let removable = read_optional(&dev.join("removable")).is_some_and(|v| v == "1");
        let via_usb = fs::canonicalize(dev)
            .map(|p| p.to_string_lossy().contains("/usb"))
            .unwrap_or(false);
        if removable || via_usb {
            "USB".to_string()
        } else {
            INTERFACE_IDE.to_string()
        }
    }

    pub(super) fn network_adapters(root: &Path) -> ProviderResult<Vec<NetworkAdapter>> {
        let net = root.join("sys/class/net");
        let entries =
            fs::read_dir(&net).map_err(|e| ProviderError::unavailable("network adapters", e))?;

        let mut adapters = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ProviderError::unavailable("network adapters", e))?;
            let iface = entry.path();
            // Skips control files such as `bonding_masters`.
            if !iface.is_dir() {
                continue;
            }
            let address = read_optional(&iface.join("address")).unwrap_or_default();

            let operstate = read_optional(&iface.join("operstate")).unwrap_or_default();
            let flags = read_optional(&iface.join("flags"))
                .and_then(|f| u32::from_str_radix(f.trim_start_matches("0x"), 16).ok())
                .unwrap_or(0);
            // Loopback and some virtual links report "unknown" while up.
            let is_up = operstate == "up" || (operstate == "unknown" && flags & IFF_UP != 0);

            let arp_type = read_optional(&iface.join("type")).and_then(|t| t.parse::<u32>().ok());
            let kind = match arp_type {
                Some(ARPHRD_LOOPBACK) => AdapterKind::Loopback,
                Some(ARPHRD_ETHER) if iface.join("wireless").exists() => AdapterKind::Wireless,
                Some(ARPHRD_ETHER) => AdapterKind::Ethernet,
                Some(_) => AdapterKind::Other,
                None => AdapterKind::Unknown,
            };

            adapters.push(NetworkAdapter {
                name: entry.file_name().to_string_lossy().into_owned(),
                address: render_mac(&address),
                is_up,
                kind,
            });
        }
        adapters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(adapters)
    }

    /// `aa:bb:cc:dd:ee:ff` becomes `AABBCCDDEEFF`.
    pub(super) fn render_mac(address: &str) -> String {
        address
            .chars()
            .filter(|c| *c != ':')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    pub(super) fn current_uid(root: &Path) -> ProviderResult<String> {
        let status = read_value(&root.join("proc/self/status"), "current user")?;
        status
            .lines()
            .find_map(|line| line.strip_prefix("Uid:"))
            .and_then(|rest| rest.split_whitespace().next())
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::unavailable("current user", "no Uid line in process status")
            })
    }

}

#[cfg(target_os = "linux")]
impl IdentifierProvider for SystemProvider {
    fn disks(&self) -> ProviderResult<Vec<DiskInfo>> {
        linux::disks(&self.root)
    }

    fn bios_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        linux::single_value(&self.root, "sys/class/dmi/id/product_serial", "BIOS serial number")
    }

    fn baseboard_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        linux::single_value(&self.root, "sys/class/dmi/id/board_serial", "baseboard serial number")
    }

    fn os_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        linux::machine_id(&self.root)
    }

    fn network_adapters(&self) -> ProviderResult<Vec<NetworkAdapter>> {
        linux::network_adapters(&self.root)
    }

    fn current_user_id(&self) -> ProviderResult<String> {
        linux::current_uid(&self.root)
    }
}

/// Every query reports [`ProviderError::Unsupported`]. Callers on other
/// platforms supply their own [`IdentifierProvider`].
#[cfg(not(target_os = "linux"))]
impl IdentifierProvider for SystemProvider {
    fn disks(&self) -> ProviderResult<Vec<DiskInfo>> {
        Err(ProviderError::Unsupported("disk drives"))
    }

    fn bios_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        Err(ProviderError::Unsupported("BIOS serial number"))
    }

    fn baseboard_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        Err(ProviderError::Unsupported("baseboard serial number"))
    }

    fn os_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        Err(ProviderError::Unsupported("OS serial number"))
    }

    fn network_adapters(&self) -> ProviderResult<Vec<NetworkAdapter>> {
        Err(ProviderError::Unsupported("network adapters"))
    }

    fn current_user_id(&self) -> ProviderResult<String> {
        Err(ProviderError::Unsupported("current user"))
    }
}
