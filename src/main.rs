use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use argh::FromArgs;
        use at30ts74::At30ts74;
        use eyre::{eyre, Result};
        use linux_embedded_hal::I2cdev;
        use std::thread::sleep;
        use std::time::Duration;

        #[derive(FromArgs)]
        #[argh(description = "poll an at30ts74 temperature sensor")]
        struct InputArgs {
            #[argh(option, short = 'd', default = "String::from(\"/dev/i2c-0\")", description = "path to the Linux I2C device")]
            device: String,
            #[argh(option, short = 'a', default = "0x4a", from_str_fn(from_base_16), description = "sensor bus address (hex)")]
            addr: u8,
        }

        fn from_base_16(val: &str) -> Result<u8, String> {
            let no_prefix = val.trim_start_matches("0x");

            match u8::from_str_radix(no_prefix, 16) {
                Ok(v) => Ok(v),
                Err(_) => {
                    Err("Unable to convert address from base 16".into())
                }
            }
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn main() -> Result<()> {
    let args: InputArgs = argh::from_env();

    let i2c: I2cdev = I2cdev::new(&args.device)?;
    let mut sensor = At30ts74::new(i2c, args.addr);

    sensor
        .configure()
        .map_err(|e| eyre!("failed to configure the sensor at 0x{:02x}: {}", args.addr, e))?;

    // Ctrl-C is fine here; killing the process closes the bus.
    loop {
        let temp = sensor
            .temperature()
            .map_err(|e| eyre!("failed to read a temperature: {}", e))?;

        println!("Temperature: {} C", temp);
        sleep(Duration::from_millis(100));
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
