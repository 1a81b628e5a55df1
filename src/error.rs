//! Error types for handing encoded data to a USB printer.
//!
//! Encoding itself cannot fail: every [`Command`](crate::Command) that can be
//! built is a valid one. Only acquiring the device and transferring the bytes
//! can go wrong.

use rusb;
use thiserror::Error;

/// Failure to deliver a payload to the printer.
///
/// None of these are retried by the library. The caller decides whether to
/// try again, maybe with different ids, or to report the problem.
#[derive(Error, Debug)]
pub enum Error {
    /// No attached USB device has the requested vendor and product id (and
    /// serial number, when one was configured).
    #[error("Device {vendor_id:04x}:{product_id:04x} not found")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// The device was found but its configuration could not be activated.
    #[error("Could not set active configuration")]
    CouldNotSetActiveConfiguration(#[source] rusb::Error),

    /// The device was found but could not be opened, usually a permission
    /// problem.
    #[error("Could not open device")]
    CouldNotOpenDevice(#[source] rusb::Error),

    /// The printer interface could not be claimed.
    #[error("Could not open interface")]
    CouldNotOpenInterface(#[source] rusb::Error),

    /// The device exposes no bulk OUT endpoint to write to.
    #[error("Device is missing a bulk out endpoint")]
    MissingEndpoint,

    /// libusb failure outside device acquisition: creating the context,
    /// listing devices or the bulk transfer itself.
    #[error(transparent)]
    Usb(#[from] rusb::Error),

    /// The bulk transfer ended before the whole payload was accepted.
    #[error("Wrote {written} of {expected} bytes, possibly timeout ?")]
    ShortWrite { written: usize, expected: usize },
}
