//! Quickstart example: norm of an array whose length is not a lane multiple

use lane_norm::{NormKernel, NormStrategy};

fn main() {
    println!("lane-norm Quickstart Demo\n");

    let kernel = NormKernel::detected(NormStrategy::ChunkedWithTail);
    let lanes = kernel.lane_width_for::<f64>().get();
    println!("Detected lane width for f64: {}", lanes);

    // Three full chunks plus a tail of lanes - 1 elements
    let array: Vec<f64> = (0..4 * lanes - 1).map(|i| i as f64).collect();

    let norm = kernel.norm(&array);
    let expected: f64 = array.iter().map(|x| x * x).sum::<f64>().sqrt();

    println!("   Length:   {}", array.len());
    println!("   Norm:     {}", norm);
    println!("   Expected: {}", expected);
}
