use crate::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::{Arc, Mutex};

/// Creates a seeded environment with silent logger.
pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new_with_seed(0))
}

/// Creates a logger which collects messages in memory.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

/// A random which returns scripted values in given order.
pub struct FakeRandom {
    ints: Mutex<Vec<i32>>,
    reals: Mutex<Vec<Float>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: Mutex::new(reversed(ints)), reals: Mutex::new(reversed(reals)) }
    }
}

fn reversed<T>(mut values: Vec<T>) -> Vec<T> {
    values.reverse();
    values
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.lock().unwrap().pop().expect("no more scripted ints");
        assert!(min <= value && value <= max, "scripted int {value} is outside [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.lock().unwrap().pop().expect("no more scripted reals")
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::new(SmallRng::seed_from_u64(0))
    }
}
