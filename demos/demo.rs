use autosampler::{sample_for_count, sample_log_for_count_with_options, SamplerOptions};
use tracing_subscriber::EnvFilter;

fn linear_points() {
    // Five points sampling f(x) = x on [0, 1]
    let points = sample_for_count(|x| x, 0.0, 1.0, 5).expect("sampling failed");
    println!("{points}");
    // A linear function is sampled uniformly except for the last step
    assert!((points[2] - 2.0 * points[1]).abs() < 1e-6);
}

fn log_points() {
    // Ten points sampling f(x) = x on [1, 1000] in log scale. The default
    // budget bracket [0, 1] is too narrow for this problem.
    let options = SamplerOptions {
        error_bracket: (0.0, 16.0),
        ..Default::default()
    };
    let points = sample_log_for_count_with_options(|x| x, 1.0, 1000.0, 10, &options)
        .expect("sampling failed");
    println!("{points:?}");
    assert_eq!(points.first(), 1.0);
    assert_eq!(points.last(), 1000.0);
}

fn main() {
    // RUST_LOG=autosampler=debug shows the bisection steps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    linear_points();
    log_points();
}
