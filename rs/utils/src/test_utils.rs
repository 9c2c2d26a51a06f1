use rand::Rng;

// Generate a random vector of doubles in [0, 1)
pub fn generate_random_vector_f64(dimension: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut vector = vec![];
    for _ in 0..dimension {
        vector.push(rng.gen::<f64>());
    }
    vector
}
