use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::prelude::*;
use serde::Deserialize;

use geovec::{Point, VectorOps};

#[derive(Parser)]
#[command(about = "Summarize a 2D point cloud by distance from the origin")]
struct Args {
    /// CSV file of `x,y` rows; omit to generate random points instead
    #[arg(long)]
    input: Option<PathBuf>,

    /// How many random points to generate when no input file is given
    #[arg(long, default_value_t = 100)]
    num_points: usize,
}

#[derive(Deserialize)]
struct Row {
    x: f64,
    y: f64,
}

fn load_points(args: &Args) -> Result<Vec<Point>, Box<dyn Error>> {
    match &args.input {
        Some(path) => {
            let mut reader = csv::Reader::from_path(path)?;
            let mut points = Vec::new();
            for row in reader.deserialize() {
                let row: Row = row?;
                points.push(Point::from_xy(row.x, row.y));
            }
            Ok(points)
        }
        None => {
            let mut rng = rand::thread_rng();
            Ok((0..args.num_points)
                .map(|_| Point::from_xy(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
                .collect())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let points = load_points(&args)?;

    if points.is_empty() {
        println!("no points to summarize");
        return Ok(());
    }

    let nearest = points
        .iter()
        .min_by(|a, b| a.magnitude_cmp(b))
        .expect("points is non-empty");
    let farthest = points
        .iter()
        .max_by(|a, b| a.magnitude_cmp(b))
        .expect("points is non-empty");

    println!("{} points", points.len());
    println!("nearest to origin:  {} (distance {})", nearest, nearest.distance());
    println!("farthest from origin: {} (distance {})", farthest, farthest.distance());

    let centroid = points
        .iter()
        .try_fold(Point::from_xy(0.0, 0.0), |sum, point| sum.add(point))?
        .div(points.len() as f64)?;
    println!("centroid: {}", centroid);
    println!("centroid mirrored across the x axis: {}", centroid.flip_x());

    Ok(())
}
