//! Shared test helpers for authentication tests.

#![allow(dead_code)]

use devauth_auth::{
    AdapterKind, DiskInfo, IdentifierProvider, NetworkAdapter, ProviderError, ProviderResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const USER_SID: &str = "S-1-5-21-3623811015-3361044348-30300820-1013";

/// Provider with canned answers that counts how often it is queried.
pub struct FakeProvider {
    pub disks: ProviderResult<Vec<DiskInfo>>,
    pub bios: ProviderResult<Vec<String>>,
    pub baseboard: ProviderResult<Vec<String>>,
    pub os: ProviderResult<Vec<String>>,
    pub adapters: ProviderResult<Vec<NetworkAdapter>>,
    pub user: ProviderResult<String>,
    pub calls: AtomicUsize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            disks: Ok(vec![]),
            bios: Ok(vec![]),
            baseboard: Ok(vec![]),
            os: Ok(vec![]),
            adapters: Ok(vec![]),
            user: Ok(USER_SID.to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeProvider {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record<T: Clone>(&self, value: &ProviderResult<T>) -> ProviderResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        value.clone()
    }
}

impl IdentifierProvider for FakeProvider {
    fn disks(&self) -> ProviderResult<Vec<DiskInfo>> {
        self.record(&self.disks)
    }

    fn bios_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        self.record(&self.bios)
    }

    fn baseboard_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        self.record(&self.baseboard)
    }

    fn os_serial_numbers(&self) -> ProviderResult<Vec<String>> {
        self.record(&self.os)
    }

    fn network_adapters(&self) -> ProviderResult<Vec<NetworkAdapter>> {
        self.record(&self.adapters)
    }

    fn current_user_id(&self) -> ProviderResult<String> {
        self.record(&self.user)
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn disk(interface_type: &str, serial: &str, instance_path: &str) -> DiskInfo {
    DiskInfo {
        interface_type: interface_type.to_string(),
        serial_number: Some(serial.to_string()),
        instance_path: Some(instance_path.to_string()),
    }
}

pub fn internal_disk(serial: &str) -> DiskInfo {
    disk("IDE", serial, &format!("SCSI\\DISK&VEN_NVME/{serial}"))
}

pub fn usb_disk(serial: &str) -> DiskInfo {
    disk("USB", serial, &format!("USBSTOR\\DISK&VEN_SANDISK/{serial}"))
}

pub fn adapter(name: &str, address: &str, is_up: bool, kind: AdapterKind) -> NetworkAdapter {
    NetworkAdapter {
        name: name.to_string(),
        address: address.to_string(),
        is_up,
        kind,
    }
}

pub fn unavailable(resource: &'static str) -> ProviderError {
    ProviderError::unavailable(resource, "access denied")
}
