use log::{debug, info};
use rusb::{Context, Device, DeviceDescriptor, DeviceHandle, Direction, TransferType, UsbContext};
use std::time::Duration;

use crate::{command::encode_all, error::Error, Command};

/// USB vendor id of Seiko Epson, the maker of the TM series.
pub const EPSON_VENDOR_ID: u16 = 0x04B8;

#[derive(Debug, Clone, Copy)]
struct Endpoint {
    config: u8,
    iface: u8,
    setting: u8,
    address: u8,
}

/// An opened printer with its interface claimed.
///
/// The interface is released when the value is dropped, so a `Printer` should
/// not outlive the job it was opened for.
pub struct Printer {
    handle: Box<DeviceHandle<Context>>,
    endpoint: Endpoint,
    config: Config,
}

impl Printer {
    pub fn new(config: Config) -> Result<Self, Error> {
        let context = Context::new()?;
        Self::with_context(&context, config)
    }

    /// Open the printer using an existing libusb context.
    pub fn with_context(context: &Context, config: Config) -> Result<Self, Error> {
        let (device, device_desc, mut handle) = Self::open_device(context, &config)?;

        let endpoint =
            match Self::find_endpoint(&device, &device_desc, Direction::Out, TransferType::Bulk) {
                Some(endpoint) => endpoint,
                None => return Err(Error::MissingEndpoint),
            };
        debug!("{:?}", endpoint);

        // Only Linux can detach a kernel driver, elsewhere this reports NotSupported
        match handle.set_auto_detach_kernel_driver(true) {
            Ok(()) => info!(" Kernel driver auto detach enabled"),
            Err(err) => debug!("Kernel driver auto detach unavailable: {:?}", err),
        }

        match handle.active_configuration() {
            Ok(active) if active == endpoint.config => {}
            _ => match handle.set_active_configuration(endpoint.config) {
                Ok(()) => {}
                // Another driver holds the device configured, writing still works
                Err(rusb::Error::Busy) => debug!("Configuration busy, keeping the active one"),
                Err(err) => return Err(Error::CouldNotSetActiveConfiguration(err)),
            },
        }

        handle
            .claim_interface(endpoint.iface)
            .map_err(Error::CouldNotOpenInterface)?;
        if let Err(err) = handle.set_alternate_setting(endpoint.iface, endpoint.setting) {
            // claimed but unusable: hand the interface back before failing
            handle.release_interface(endpoint.iface).ok();
            return Err(Error::CouldNotOpenInterface(err));
        }

        Ok(Printer {
            handle: Box::new(handle),
            endpoint,
            config,
        })
    }

    fn open_device(
        context: &Context,
        config: &Config,
    ) -> Result<(Device<Context>, DeviceDescriptor, DeviceHandle<Context>), Error> {
        let devices = context.devices()?;
        let mut open_error = None;

        for device in devices.iter() {
            let device_desc = match device.device_descriptor() {
                Ok(d) => d,
                Err(err) => {
                    debug!("{:?}", err);
                    continue;
                }
            };

            if device_desc.vendor_id() != config.vendor_id
                || device_desc.product_id() != config.product_id
            {
                continue;
            }
            debug!("{:?}", device_desc);

            let handle = match device.open() {
                Ok(handle) => handle,
                Err(err) => {
                    debug!("Failed to open device: {:?}", err);
                    open_error = Some(err);
                    continue;
                }
            };

            match &config.serial {
                None => return Ok((device, device_desc, handle)),
                Some(serial) => match Self::read_serial(&handle, &device_desc) {
                    Some(s) if &s == serial => return Ok((device, device_desc, handle)),
                    Some(s) => debug!("Skipping device with serial {:?}", s),
                    None => continue,
                },
            }
        }

        if let Some(err) = open_error {
            return Err(Error::CouldNotOpenDevice(err));
        }
        debug!(
            "No device match {:04x}:{:04x} serial {:?}",
            config.vendor_id, config.product_id, config.serial
        );
        Err(Error::DeviceNotFound {
            vendor_id: config.vendor_id,
            product_id: config.product_id,
        })
    }

    fn read_serial(
        handle: &DeviceHandle<Context>,
        device_desc: &DeviceDescriptor,
    ) -> Option<String> {
        let timeout = Duration::from_secs(1);
        let languages = match handle.read_languages(timeout) {
            Ok(l) => l,
            Err(err) => {
                debug!("Failed to read languages: {:?}", err);
                return None;
            }
        };
        let language = *languages.first()?;
        match handle.read_serial_number_string(language, device_desc, timeout) {
            Ok(s) => Some(s),
            Err(err) => {
                debug!("Failed to read serial number string: {:?}", err);
                None
            }
        }
    }

    fn find_endpoint(
        device: &Device<Context>,
        device_desc: &DeviceDescriptor,
        direction: Direction,
        transfer_type: TransferType,
    ) -> Option<Endpoint> {
        for n in 0..device_desc.num_configurations() {
            let config_desc = match device.config_descriptor(n) {
                Ok(c) => c,
                Err(_) => continue,
            };
            for interface in config_desc.interfaces() {
                for interface_desc in interface.descriptors() {
                    for endpoint_desc in interface_desc.endpoint_descriptors() {
                        if endpoint_desc.direction() == direction
                            && endpoint_desc.transfer_type() == transfer_type
                        {
                            return Some(Endpoint {
                                config: config_desc.number(),
                                iface: interface_desc.interface_number(),
                                setting: interface_desc.setting_number(),
                                address: endpoint_desc.address(),
                            });
                        }
                    }
                }
            }
        }
        None
    }

    /// Send raw bytes in a single bulk transfer.
    pub fn write(&self, buf: &[u8]) -> Result<usize, Error> {
        let n = self
            .handle
            .write_bulk(self.endpoint.address, buf, self.config.timeout)?;
        if n == buf.len() {
            debug!("wrote {} bytes", n);
            Ok(n)
        } else {
            debug!(
                "write error: bytes wrote {} != bytes supplied {}, possibly timeout ?",
                n,
                buf.len()
            );
            Err(Error::ShortWrite {
                written: n,
                expected: buf.len(),
            })
        }
    }

    /// Encode `commands` and send them as one buffer.
    pub fn send(&self, commands: &[Command]) -> Result<(), Error> {
        self.write(&encode_all(commands))?;
        Ok(())
    }
}

impl Drop for Printer {
    fn drop(&mut self) {
        if let Err(err) = self.handle.release_interface(self.endpoint.iface) {
            debug!("Failed to release interface {}: {:?}", self.endpoint.iface, err);
        }
    }
}

/// Hand `payload` to the first printer matching `vendor_id` and `product_id`.
///
/// The device is opened, written to once and released again. Nothing is kept
/// open between calls and nothing is retried.
pub fn print(vendor_id: u16, product_id: u16, payload: &[u8]) -> Result<(), Error> {
    let printer = Printer::new(Config::new(vendor_id, product_id))?;
    printer.write(payload)?;
    Ok(())
}

/// Which printer to open and how long a write may take.
#[derive(Debug, Clone)]
pub struct Config {
    vendor_id: u16,
    product_id: u16,
    serial: Option<String>,
    timeout: Duration,
}

impl Config {
    /// Match the first device with these USB ids.
    ///
    /// # Example
    ///
    /// ```
    /// use escpos::{Config, EPSON_VENDOR_ID};
    /// use std::time::Duration;
    ///
    /// // Epson TM-T20III
    /// let config = Config::new(EPSON_VENDOR_ID, 0x0202).timeout(Duration::from_secs(30));
    /// assert_eq!(config.product_id(), 0x0202);
    /// ```
    pub fn new(vendor_id: u16, product_id: u16) -> Config {
        Config {
            vendor_id,
            product_id,
            serial: None,
            timeout: Duration::from_secs(10),
        }
    }

    /// Only accept a device reporting this USB serial number.
    pub fn serial(self, serial: impl Into<String>) -> Self {
        Config {
            serial: Some(serial.into()),
            ..self
        }
    }

    /// Bulk write timeout.
    pub fn timeout(self, timeout: Duration) -> Self {
        Config { timeout, ..self }
    }

    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    pub fn product_id(&self) -> u16 {
        self.product_id
    }
}
