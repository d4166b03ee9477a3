//! Checks tied to specific hardware: firmware, motherboard, disks and
//! network adapters.
//!
//! These fail after repairs that replace the part in question.

use crate::error::{AuthError, AuthResult};
use crate::matching::{match_enumerated, MatchOutcome};
use crate::provider::{AdapterKind, DiskClass, DiskIdentifier, IdentifierProvider};
use devauth_define::DeviceAuthDefine;
use std::sync::Arc;

const SERIAL_NUMBERS: &str = "serial numbers";
const INSTANCE_PATHS: &str = "device instance paths";
const MAC_ADDRESSES: &str = "MAC addresses";

/// Hardware-bound authentication checks.
#[derive(Clone)]
pub struct HardwareAuth {
    provider: Arc<dyn IdentifierProvider>,
}

impl HardwareAuth {
    /// Creates the checks over an identifier provider.
    pub fn new(provider: Arc<dyn IdentifierProvider>) -> Self {
        Self { provider }
    }

    /// Authenticates by the serial number tied to the BIOS firmware.
    ///
    /// This is not the motherboard serial number.
    pub fn computer_serial_number<S: AsRef<str>>(
        &self,
        serial_numbers: &[S],
    ) -> AuthResult<MatchOutcome> {
        match_enumerated(serial_numbers, SERIAL_NUMBERS, || {
            self.provider.bios_serial_numbers()
        })
    }

    /// Authenticates by motherboard serial number.
    pub fn baseboard_serial_number<S: AsRef<str>>(
        &self,
        serial_numbers: &[S],
    ) -> AuthResult<MatchOutcome> {
        match_enumerated(serial_numbers, SERIAL_NUMBERS, || {
            self.provider.baseboard_serial_numbers()
        })
    }

    /// Authenticates by the serial number of an internal (system) disk.
    pub fn system_disk<S: AsRef<str>>(&self, serial_numbers: &[S]) -> AuthResult<MatchOutcome> {
        self.disk(DiskClass::Internal, DiskIdentifier::SerialNumber, serial_numbers)
    }

    /// Authenticates by the device instance path of an internal disk.
    pub fn system_disk_instance_path<S: AsRef<str>>(
        &self,
        instance_paths: &[S],
    ) -> AuthResult<MatchOutcome> {
        self.disk(DiskClass::Internal, DiskIdentifier::InstancePath, instance_paths)
    }

    /// Authenticates by the serial number of an external disk
    /// (USB memory, external HDD/SSD, UAS).
    pub fn external_disk<S: AsRef<str>>(&self, serial_numbers: &[S]) -> AuthResult<MatchOutcome> {
        self.disk(DiskClass::External, DiskIdentifier::SerialNumber, serial_numbers)
    }

    /// Authenticates by the device instance path of an external disk.
    pub fn external_disk_instance_path<S: AsRef<str>>(
        &self,
        instance_paths: &[S],
    ) -> AuthResult<MatchOutcome> {
        self.disk(DiskClass::External, DiskIdentifier::InstancePath, instance_paths)
    }

    /// Compares disks of one class only. A disk of the other class never
    /// matches, even with an identical identifier.
    pub fn disk<S: AsRef<str>>(
        &self,
        class: DiskClass,
        which: DiskIdentifier,
        expected: &[S],
    ) -> AuthResult<MatchOutcome> {
        let what = match which {
            DiskIdentifier::SerialNumber => SERIAL_NUMBERS,
            DiskIdentifier::InstancePath => INSTANCE_PATHS,
        };
        match_enumerated(expected, what, || {
            self.provider.disks().map(|disks| {
                disks
                    .into_iter()
                    .filter(|disk| disk.class() == class)
                    .filter_map(|disk| disk.identifier(which).map(str::to_owned))
                    .collect::<Vec<_>>()
            })
        })
    }

    /// Authenticates by network adapter physical address.
    ///
    /// Only adapters that are up and of a known type are considered.
    /// Loopback adapters are skipped unless `include_loopback` is set.
    /// Addresses are compared against the provider's rendering
    /// (12 hex digits, no separators).
    pub fn ethernet_address<S: AsRef<str>>(
        &self,
        addresses: &[S],
        include_loopback: bool,
    ) -> AuthResult<MatchOutcome> {
        match_enumerated(addresses, MAC_ADDRESSES, || {
            self.provider.network_adapters().map(|adapters| {
                adapters
                    .into_iter()
                    .filter(|a| a.is_up && a.kind != AdapterKind::Unknown)
                    .filter(|a| include_loopback || a.kind != AdapterKind::Loopback)
                    .map(|a| a.address)
                    .collect::<Vec<_>>()
            })
        })
    }

    /// Authenticates a disk against a named device from a definition.
    ///
    /// The first device with `name` supplies the expected serial number or
    /// instance path.
    pub fn defined_disk(
        &self,
        define: &DeviceAuthDefine,
        name: &str,
        class: DiskClass,
        which: DiskIdentifier,
    ) -> AuthResult<MatchOutcome> {
        let device = define
            .get(name)
            .ok_or_else(|| AuthError::DeviceNotDefined(name.to_string()))?;
        let expected = match which {
            DiskIdentifier::SerialNumber => &device.serial_number,
            DiskIdentifier::InstancePath => &device.device_instance_path,
        };
        self.disk(class, which, std::slice::from_ref(expected))
    }
}
