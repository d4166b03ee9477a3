//! Loading and saving encrypted definitions.
//!
//! Every entry point derives the key first, so a malformed application
//! identifier fails with [`DefineError::InvalidKey`] before any file or
//! stream is touched. The key is derived again on every call and dropped
//! (and zeroized) when the call returns.

use crate::codec;
use crate::define::DeviceAuthDefine;
use crate::error::{DefineError, DefineResult};
use devauth_crypto::{decrypt, derive_key, encrypt, AppKey, EncryptedData};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Loads a definition from a container file.
pub fn load_from_file(path: impl AsRef<Path>, app_id: &str) -> DefineResult<DeviceAuthDefine> {
    let key = derive_key(app_id)?;
    let path = path.as_ref();

    let bytes = fs::read(path)?;
    debug!(path = %path.display(), size_bytes = bytes.len(), "Loading device definition file");

    open(&key, &bytes)
}

/// Loads a definition from an in-memory container, such as one embedded
/// with `include_bytes!`.
pub fn load_from_bytes(bytes: &[u8], app_id: &str) -> DefineResult<DeviceAuthDefine> {
    let key = derive_key(app_id)?;
    open(&key, bytes)
}

/// Loads a definition from a stream, reading it to the end.
pub fn load_from_reader<R: Read>(mut reader: R, app_id: &str) -> DefineResult<DeviceAuthDefine> {
    let key = derive_key(app_id)?;

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    open(&key, &bytes)
}

/// Encrypts a definition into container bytes.
pub fn save_to_bytes(app_id: &str, define: &DeviceAuthDefine) -> DefineResult<Vec<u8>> {
    let key = derive_key(app_id)?;
    seal(&key, define)
}

/// Writes an encrypted definition to a stream.
pub fn save_to_writer<W: Write>(
    mut writer: W,
    app_id: &str,
    define: &DeviceAuthDefine,
) -> DefineResult<()> {
    let key = derive_key(app_id)?;
    let bytes = seal(&key, define)?;

    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Writes an encrypted definition to a file.
///
/// The container is written to a uniquely named temporary file next to
/// `path`, synced, then renamed over `path`. Readers see either the old
/// or the new container and never a partial one, even while other saves
/// to the same path are in flight.
pub fn save_to_file(
    path: impl AsRef<Path>,
    app_id: &str,
    define: &DeviceAuthDefine,
) -> DefineResult<()> {
    let key = derive_key(app_id)?;
    let path = path.as_ref();
    let bytes = seal(&key, define)?;

    write_atomic(path, &bytes)?;
    debug!(
        path = %path.display(),
        devices = define.len(),
        size_bytes = bytes.len(),
        "Saved device definition file"
    );
    Ok(())
}

fn open(key: &AppKey, bytes: &[u8]) -> DefineResult<DeviceAuthDefine> {
    let define = EncryptedData::from_bytes(bytes)
        .and_then(|encrypted| decrypt(key, &encrypted))
        .map_err(|_| DefineError::Unreadable)
        .and_then(|payload| codec::decode(&payload).map_err(|_| DefineError::Unreadable));

    match &define {
        Ok(define) => debug!(devices = define.len(), "Device definition decoded"),
        Err(_) => debug!("Device definition rejected"),
    }
    define
}

fn seal(key: &AppKey, define: &DeviceAuthDefine) -> DefineResult<Vec<u8>> {
    let payload = codec::encode(define)?;
    Ok(encrypt(key, &payload).to_bytes())
}

/// Writes through a uniquely named temporary file in the destination
/// directory, so concurrent saves to one path never share a temp file.
fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
