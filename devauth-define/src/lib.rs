//! Device authentication definitions.
//!
//! A definition is an ordered list of [`Device`] records naming the
//! hardware an application is allowed to run on. It is persisted as an
//! encrypted container keyed to the application's identifier:
//!
//! - [`codec`] turns a [`DeviceAuthDefine`] into a versioned JSON payload and back
//! - [`store`] encrypts that payload and reads/writes files, buffers and streams
//!
//! # Reading a definition
//!
//! ```no_run
//! use devauth_define::load_from_file;
//!
//! let define = load_from_file("devices.dat", "11111111-2222-3333-4444-555566667777")?;
//! if let Some(device) = define.get("PC-1") {
//!     println!("{}", device.serial_number);
//! }
//! # Ok::<(), devauth_define::DefineError>(())
//! ```
//!
//! Load failures caused by a wrong identifier, a corrupted file or a file
//! that is not a container at all are all reported as
//! [`DefineError::Unreadable`].

pub mod codec;
mod define;
mod error;
pub mod store;

pub use define::{Device, DeviceAuthDefine};
pub use error::{DefineError, DefineResult};
pub use store::{
    load_from_bytes, load_from_file, load_from_reader, save_to_bytes, save_to_file,
    save_to_writer,
};
