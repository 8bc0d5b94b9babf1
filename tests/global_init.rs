//! Process-wide generator configured before first use

use snowflake_gen::{data_center, worker, SnowflakeConfig, SnowflakeError};

#[test]
fn test_init_then_use() {
    let bad = SnowflakeConfig::builder().worker(32).build();
    assert_eq!(
        snowflake_gen::init(bad),
        Err(SnowflakeError::InvalidWorker { value: 32, max: 31 })
    );

    // A failed init leaves room for a retry
    let good = SnowflakeConfig::builder().data_center(7).worker(11).build();
    snowflake_gen::init(good).unwrap();

    let id = snowflake_gen::next();
    assert_eq!(data_center(id), 7);
    assert_eq!(worker(id), 11);

    // Reconfiguration after the fact has no effect
    let other = SnowflakeConfig::builder().data_center(1).worker(1).build();
    assert!(snowflake_gen::init(other).is_ok());

    let id: i64 = snowflake_gen::next_string().parse().unwrap();
    assert_eq!(data_center(id), 7);
    assert_eq!(worker(id), 11);
    assert_eq!(snowflake_gen::default_generator().data_center(), 7);
}
