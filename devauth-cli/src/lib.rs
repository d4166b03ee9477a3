//! Commands behind the `devauth` administration tool.
//!
//! Each command writes its report to the supplied writer so the binary
//! can print to stdout and tests can capture the output.

use anyhow::{bail, Context, Result};
use devauth_auth::{
    file_digest, DiskClass, DiskIdentifier, HardwareAuth, HashAlgorithm, IdentifierProvider,
    MatchOutcome, ProviderResult,
};
use devauth_define::{load_from_file, save_to_file, Device, DeviceAuthDefine};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Exit status of `check` when a disk matched.
pub const EXIT_MATCHED: u8 = 0;
/// Exit status of `check` when nothing matched.
pub const EXIT_NO_MATCH: u8 = 1;
/// Exit status of `check` when the disks could not be enumerated.
pub const EXIT_UNAVAILABLE: u8 = 2;

/// Exit status of any command that fails before reaching a decision:
/// bad app id, unreadable definition, undefined device, I/O errors.
pub const EXIT_ERROR: u8 = 3;

/// Maps a check outcome to the process exit status.
pub fn exit_status(outcome: &MatchOutcome) -> u8 {
    match outcome {
        MatchOutcome::Matched => EXIT_MATCHED,
        MatchOutcome::NoMatch => EXIT_NO_MATCH,
        MatchOutcome::Unavailable(_) => EXIT_UNAVAILABLE,
    }
}

/// Maps the result of `check` to the process exit status. Errors never
/// share a status with a completed decision.
pub fn check_exit_status(result: &Result<MatchOutcome>) -> u8 {
    match result {
        Ok(outcome) => exit_status(outcome),
        Err(_) => EXIT_ERROR,
    }
}

/// Writes an empty definition. Refuses to replace an existing file
/// unless `force` is set.
pub fn init(path: &Path, app_id: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_to_file(path, app_id, &DeviceAuthDefine::new())
        .with_context(|| format!("failed to write definition to {}", path.display()))?;
    info!("Created empty definition at {}", path.display());
    Ok(())
}

/// Appends a device and saves the definition. Returns the new device count.
pub fn add(path: &Path, app_id: &str, device: Device) -> Result<usize> {
    let mut define = load(path, app_id)?;
    info!("Adding device {:?}", device.name);
    define.push(device);
    save_to_file(path, app_id, &define)
        .with_context(|| format!("failed to write definition to {}", path.display()))?;
    Ok(define.len())
}

/// Prints every device in definition order.
pub fn list(path: &Path, app_id: &str, out: &mut impl Write) -> Result<()> {
    let define = load(path, app_id)?;
    for device in &define {
        write_device(out, device)?;
    }
    Ok(())
}

/// Prints the first device named `name`.
pub fn show(path: &Path, app_id: &str, name: &str, out: &mut impl Write) -> Result<()> {
    let define = load(path, app_id)?;
    let Some(device) = define.get(name) else {
        bail!("device not defined: {name}");
    };
    writeln!(out, "name:          {}", device.name)?;
    writeln!(out, "serial number: {}", device.serial_number)?;
    writeln!(out, "instance path: {}", device.device_instance_path)?;
    if let Some(comment) = &device.comment {
        writeln!(out, "comment:       {comment}")?;
    }
    Ok(())
}

/// Checks the named device against the disks `provider` reports.
pub fn check(
    path: &Path,
    app_id: &str,
    name: &str,
    class: DiskClass,
    which: DiskIdentifier,
    provider: Arc<dyn IdentifierProvider>,
) -> Result<MatchOutcome> {
    let define = load(path, app_id)?;
    let outcome = HardwareAuth::new(provider).defined_disk(&define, name, class, which)?;
    info!("Device {name:?}: {outcome}");
    Ok(outcome)
}

/// Prints a file digest in the form file-hash checks expect.
pub fn hash(path: &Path, algorithm: HashAlgorithm, out: &mut impl Write) -> Result<String> {
    let digest = file_digest(path, algorithm)
        .with_context(|| format!("failed to hash {}", path.display()))?;
    writeln!(out, "{digest}")?;
    Ok(digest)
}

/// Prints everything `provider` enumerates. Failures are reported inline.
pub fn probe(provider: &dyn IdentifierProvider, out: &mut impl Write) -> Result<()> {
    write_section(out, "BIOS serial numbers", provider.bios_serial_numbers())?;
    write_section(
        out,
        "baseboard serial numbers",
        provider.baseboard_serial_numbers(),
    )?;
    write_section(out, "OS serial numbers", provider.os_serial_numbers())?;
    write_section(
        out,
        "current user",
        provider.current_user_id().map(|id| vec![id]),
    )?;

    writeln!(out, "disks:")?;
    match provider.disks() {
        Ok(disks) => {
            for disk in disks {
                let class = match disk.class() {
                    DiskClass::Internal => "internal",
                    DiskClass::External => "external",
                };
                writeln!(
                    out,
                    "  {class:8} {:4} serial={} path={}",
                    disk.interface_type,
                    disk.serial_number.as_deref().unwrap_or("-"),
                    disk.instance_path.as_deref().unwrap_or("-"),
                )?;
            }
        }
        Err(e) => writeln!(out, "  unavailable: {e}")?,
    }

    writeln!(out, "network adapters:")?;
    match provider.network_adapters() {
        Ok(adapters) => {
            for adapter in adapters {
                let state = if adapter.is_up { "up" } else { "down" };
                writeln!(
                    out,
                    "  {:12} {} {state:4} {:?}",
                    adapter.name, adapter.address, adapter.kind
                )?;
            }
        }
        Err(e) => writeln!(out, "  unavailable: {e}")?,
    }
    Ok(())
}

fn load(path: &Path, app_id: &str) -> Result<DeviceAuthDefine> {
    load_from_file(path, app_id)
        .with_context(|| format!("failed to load definition from {}", path.display()))
}

fn write_device(out: &mut impl Write, device: &Device) -> Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}",
        device.name,
        device.serial_number,
        device.device_instance_path,
        device.comment.as_deref().unwrap_or("")
    )?;
    Ok(())
}

fn write_section(
    out: &mut impl Write,
    title: &str,
    values: ProviderResult<Vec<String>>,
) -> Result<()> {
    writeln!(out, "{title}:")?;
    match values {
        Ok(values) => {
            for value in values {
                writeln!(out, "  {value}")?;
            }
        }
        Err(e) => writeln!(out, "  unavailable: {e}")?,
    }
    Ok(())
}
