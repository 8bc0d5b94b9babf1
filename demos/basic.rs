use snowflake_gen::{decompose, Snowflake, SnowflakeConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let config = SnowflakeConfig::builder().data_center(1).worker(2).build();
    let generator = Snowflake::new(config).unwrap();

    let id1 = generator.next();
    let id2 = generator.next();
    let id3 = generator.next();

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Or use the process-wide generator
    println!("\nDefault generator: {}", snowflake_gen::next_string());
}

fn print_id(id: i64, generator: &Snowflake) {
    let parts = decompose(id);
    let datetime = generator.datetime(id).unwrap();

    println!(
        "  ID: {id}, Human date: {datetime}, Data center: {}, Worker: {}, Sequence: {}",
        parts.data_center, parts.worker, parts.sequence
    );
}
