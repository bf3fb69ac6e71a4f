// src/main.rs

use log::info;
use env_logger::Env;

use mathkit::collections::list_ops;
use mathkit::config::MathkitConfig;
use mathkit::geometry::{coordinate, plane, solid};
use mathkit::integer_math::combinatorics::factorial;
use mathkit::integer_math::digits::{digit_sum, is_armstrong_number};
use mathkit::integer_math::divisors::is_perfect_number;
use mathkit::integer_math::gcd::GCD;
use mathkit::integer_math::primes::primes_up_to;
use mathkit::matrix::magic_square::is_magic_square;
use mathkit::sequences::fibonacci::fibonacci_sequence;
use mathkit::sequences::pascal::pascal_triangle;

fn main() {
    let config = MathkitConfig::load().unwrap_or_default();

    // Initialize the logger
    let env = Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    if config.demo.sequences {
        info!("========================================");
        info!("SEQUENCES");
        info!("========================================");
        info!("First 10 Fibonacci terms: {:?}", fibonacci_sequence(10));
        info!("10! = {}", factorial(10));
        match pascal_triangle(5) {
            Ok(triangle) => {
                for row in &triangle {
                    info!("Pascal row: {:?}", row);
                }
            }
            Err(e) => info!("Pascal's triangle failed: {}", e),
        }
        info!("");
    }

    if config.demo.number_theory {
        info!("========================================");
        info!("NUMBER THEORY");
        info!("========================================");
        info!("Primes up to 50: {:?}", primes_up_to(50));
        info!("28 perfect? {}", is_perfect_number(28));
        info!("gcd(48, 18) = {}", GCD::find_gcd_pair(48, 18));
        info!("lcm(4, 6) = {}", GCD::find_lcm_pair(4, 6));
        info!("digit_sum(12345) = {}", digit_sum(12345));
        info!("153 Armstrong? {}", is_armstrong_number(153));
        let lo_shu = vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]];
        info!("Lo Shu magic? {}", is_magic_square(&lo_shu));
        info!("Missing from [1, 2, 4, 5]: {}", list_ops::find_missing_number(&[1, 2, 4, 5]));
        info!("");
    }

    if config.demo.geometry {
        info!("========================================");
        info!("GEOMETRY");
        info!("========================================");
        info!("Circle area (r = 2): {}", plane::circle_area(2.0));
        info!("3-4-5 a valid triangle? {}", plane::is_valid_triangle(3.0, 4.0, 5.0));
        info!("Sphere volume (r = 3): {}", solid::sphere_volume(3.0));
        info!(
            "Distance (0,0) -> (3,4): {}",
            coordinate::distance_between_points(0.0, 0.0, 3.0, 4.0)
        );
        info!("");
    }
}
