//! Compare all norm strategies on lengths around the lane width

use lane_norm::verification::CrossCheck;

fn main() {
    let lane_width = 4;

    println!(
        "{:>6} {:>5} {:>22} {:>22} {:>22}",
        "len", "tail", "scalar", "chunked", "chunked_with_tail"
    );

    for len in [0usize, 1, 3, 4, 5, 11, 12, 13] {
        let array: Vec<f64> = (0..len).map(|i| (i as f64 + 1.0).sqrt()).collect();
        let check = CrossCheck::run(&array, lane_width).unwrap();
        println!(
            "{:>6} {:>5} {:>22.17} {:>22.17} {:>22.17}",
            check.len, check.tail_len, check.scalar, check.chunked, check.chunked_with_tail
        );
    }
}
