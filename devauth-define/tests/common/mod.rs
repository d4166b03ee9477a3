//! Shared test helpers for definition tests.

#![allow(dead_code)]

use devauth_define::{Device, DeviceAuthDefine};

pub const APP_ID: &str = "11111111-2222-3333-4444-555566667777";
pub const OTHER_APP_ID: &str = "99999999-8888-7777-6666-555544443333";

/// The single-record definition used throughout the scenario tests.
pub fn pc1_define() -> DeviceAuthDefine {
    let mut define = DeviceAuthDefine::new();
    define.push(Device::new("PC-1", "SN12345").with_instance_path("VID_1234/PID_5678/SN12345"));
    define
}

/// A definition with several records, a duplicate name and comments.
pub fn mixed_define() -> DeviceAuthDefine {
    vec![
        Device::new("PC-1", "SN12345")
            .with_instance_path("VID_1234/PID_5678/SN12345")
            .with_comment("office desktop"),
        Device::new("USB-KEY", "4C530001230101117025")
            .with_instance_path("USBSTOR\\DISK&VEN_SANDISK&PROD_CRUZER/4C530001230101117025&0"),
        Device::new("PC-1", "SN-SHADOWED"),
        Device::new("", ""),
        Device::new("ラベル", "シリアル").with_comment("non-ASCII \"quoted\" text"),
    ]
    .into()
}
