use rand::Rng;
use snowflake_gen::{data_center, worker, Snowflake, SnowflakeConfig};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt::init();

    // One generator per simulated node, shared by that node's threads
    let nodes: Vec<Arc<Snowflake>> = (0..4)
        .map(|n| {
            let config = SnowflakeConfig::builder()
                .data_center(n / 2)
                .worker(n % 2)
                .build();
            Arc::new(Snowflake::new(config).unwrap())
        })
        .collect();

    let mut handles = vec![];
    for (node_id, node) in nodes.iter().enumerate() {
        for thread_id in 0..2 {
            let gen = Arc::clone(node);
            handles.push(thread::spawn(move || {
                let mut ids = Vec::new();
                let mut rng = rand::rng();

                for _ in 0..5 {
                    let id = gen.next();
                    println!(
                        "Node {} thread {} generated {} (dc={}, worker={})",
                        node_id,
                        thread_id,
                        id,
                        data_center(id),
                        worker(id)
                    );
                    ids.push(id);

                    let delay = rng.random_range(0..=9);
                    thread::sleep(Duration::from_millis(delay));
                }
                ids
            }));
        }
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
