use std::fs;

use autosampler::{sample_for_count, sample_log_for_count};

fn uniform_points(x_min: f64, x_max: f64, n_samples: usize) -> Vec<f64> {
    let mut result = vec![];
    for i in 0..n_samples {
        result.push(x_min + (x_max - x_min) / ((n_samples - 1) as f64) * (i as f64));
    }
    result
}

fn write_csv_columns(columns: &[Vec<f64>], csv_path: &str) {
    let n_samples = columns.iter().map(|c| c.len()).max().unwrap_or(0);

    let mut csv_string = String::new();

    for row_idx in 0..n_samples {
        let row: Vec<String> = columns
            .iter()
            .map(|col| match col.get(row_idx) {
                Some(v) => format!("\"{v}\""),
                None => String::from("\"\""),
            })
            .collect();

        csv_string.push_str(row.join(",").as_str());
        csv_string.push('\n');
    }
    fs::write(csv_path, csv_string).expect("Failed to write plot data");
}

fn main() {
    // Generate csv files for plotting with gnuplot
    fs::create_dir_all("plots").expect("Failed to create plot directory");

    // Adaptive vs uniform sampling of a function with a steep region
    let n_samples = 25;
    let f = |x: f64| (8.0 * x).atan() + 0.1 * x;
    let x_min = -2.0;
    let x_max = 2.0;

    let adaptive = sample_for_count(f, x_min, x_max, n_samples)
        .expect("sampling failed")
        .into_vec();
    let uniform = uniform_points(x_min, x_max, n_samples);
    let columns = vec![
        adaptive.clone(),
        adaptive.iter().map(|x| f(*x)).collect(),
        uniform.clone(),
        uniform.iter().map(|x| f(*x)).collect(),
    ];
    write_csv_columns(&columns, "plots/adaptive_vs_uniform.csv");

    // Log scale sampling of a modulus reduction curve
    let gamma_ref = 1e-3;
    let g = |x: f64| 1.0 / (1.0 + x / gamma_ref);
    let log_points = sample_log_for_count(g, 1e-6, 1e-1, 12)
        .expect("sampling failed")
        .into_vec();
    let columns = vec![log_points.clone(), log_points.iter().map(|x| g(*x)).collect()];
    write_csv_columns(&columns, "plots/log_scale.csv");
}
