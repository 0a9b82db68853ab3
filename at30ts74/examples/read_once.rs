use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        use argh::FromArgs;
        use at30ts74::At30ts74;
        use eyre::{eyre, Result};
        use linux_embedded_hal::I2cdev;

        #[derive(FromArgs)]
        #[argh(description = "read a single at30ts74 temperature")]
        struct InputArgs {
            #[argh(positional)]
            bus: String,
            #[argh(positional, from_str_fn(from_base_16))]
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

    let i2c: I2cdev = I2cdev::new(args.bus)?;
    let mut sensor = At30ts74::new(i2c, args.addr);

    sensor
        .configure()
        .map_err(|e| eyre!("failed to configure the sensor: {}", e))?;

    let temp = sensor
        .temperature()
        .map_err(|e| eyre!("failed to read a temperature: {}", e))?;
    println!("Temperature: {} C", temp);

    let _i2c_old = sensor.free();

    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn main() {}
