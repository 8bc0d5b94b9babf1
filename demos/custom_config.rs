use chrono::{TimeZone, Utc};
use snowflake_gen::{time, SnowflakeConfig};

fn main() {
    tracing_subscriber::fmt::init();

    // Configure the process-wide generator before anything uses it
    let config = SnowflakeConfig::builder()
        .data_center(3)
        .worker(17)
        .epoch(Utc.with_ymd_and_hms(2019, 3, 7, 0, 0, 0).unwrap())
        .build();
    if let Err(err) = snowflake_gen::init(config) {
        eprintln!("invalid configuration: {err}");
        std::process::exit(1);
    }

    let generator = snowflake_gen::default_generator();
    for _ in 0..5 {
        match generator.try_next() {
            Ok(id) => println!("{id} ({} ms after epoch)", time(id)),
            Err(err) => eprintln!("{err}"),
        }
    }
}
