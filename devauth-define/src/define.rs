//! In-memory device authentication definition.

use serde::{Deserialize, Serialize};

/// One expected device.
///
/// `name` and `serial_number` are required in practice; `comment` is
/// free text for whoever maintains the definition and plays no part in
/// authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Device {
    /// Name used to look the device up. Not required to be unique.
    pub name: String,
    /// Serial number as reported by the device. Format varies by vendor.
    pub serial_number: String,
    /// Device instance path (`vendor/product/serial`), compared verbatim.
    pub device_instance_path: String,
    /// Optional note.
    pub comment: Option<String>,
}

impl Device {
    /// Creates a device with a name and serial number.
    #[must_use]
    pub fn new(name: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            serial_number: serial_number.into(),
            device_instance_path: String::new(),
            comment: None,
        }
    }

    /// Sets the device instance path.
    #[must_use]
    pub fn with_instance_path(mut self, path: impl Into<String>) -> Self {
        self.device_instance_path = path.into();
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Ordered list of expected devices.
///
/// Insertion order is preserved through save and load. Lookup by name is
/// a linear scan that returns the first record with that name, so later
/// duplicates are shadowed rather than overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceAuthDefine {
    devices: Vec<Device>,
}

impl DeviceAuthDefine {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a device.
    pub fn push(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Returns the first device with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    /// Returns all devices in insertion order.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Iterates over devices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    /// Number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if no devices are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl From<Vec<Device>> for DeviceAuthDefine {
    fn from(devices: Vec<Device>) -> Self {
        Self { devices }
    }
}

impl FromIterator<Device> for DeviceAuthDefine {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DeviceAuthDefine {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}
