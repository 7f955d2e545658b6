use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const PRODUCTS: [&str; 3] = ["pink morsel", "gold morsel", "magenta morsel"];
const REGIONS: [&str; 4] = ["north", "south", "east", "west"];

const PROBABILITY_INVALID: f64 = 0.02;

const PRICE_BEFORE: &str = "$3.00";
const PRICE_AFTER: &str = "$5.00";

struct GeneratorConfig {
    num_files: usize,
    days_per_file: i64,
    output_dir: PathBuf,
    start: NaiveDate,
    price_increase: NaiveDate,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_files = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);
        let days_per_file = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(120);
        let output_dir = args.get(3).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));

        Self {
            num_files,
            days_per_file,
            output_dir,
            start: NaiveDate::from_ymd_opt(2020, 9, 1).unwrap_or_default(),
            price_increase: NaiveDate::from_ymd_opt(2021, 1, 15).unwrap_or_default(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} files of {} days each in {}...",
        config.num_files, config.days_per_file, config.output_dir.display()
    );

    create_dir_all(&config.output_dir)?;

    let mut rng = rand::thread_rng();

    for file_index in 0..config.num_files {
        let first_day = config.start + Duration::days(file_index as i64 * config.days_per_file);
        let path = config.output_dir.join(format!("daily_sales_data_{file_index}.csv"));

        generate_file(&path, &mut rng, first_day, &config)?;
    }

    println!("Generation complete.");

    Ok(())
}

fn generate_file<R: Rng>(path: &Path, rng: &mut R, first_day: NaiveDate, config: &GeneratorConfig) -> io::Result<()> {
    let mut writer = io::BufWriter::new(File::create(path)?);

    writeln!(writer, "product,price,quantity,date,region")?;

    for offset in 0..config.days_per_file {
        let date = first_day + Duration::days(offset);

        for product in PRODUCTS {
            for region in REGIONS {
                if rng.gen_bool(PROBABILITY_INVALID) {
                    generate_invalid_record(&mut writer, rng, date)?;
                    continue;
                }

                let price = match product {
                    "pink morsel" if date >= config.price_increase => PRICE_AFTER,
                    "pink morsel" => PRICE_BEFORE,
                    _ => "$9.99",
                };

                writeln!(writer, "{},{},{},{},{}", product, price, rng.gen_range(300..700), date, region)?;
            }
        }
    }

    writer.flush()
}

fn generate_invalid_record<W: Write, R: Rng>(writer: &mut W, rng: &mut R, date: NaiveDate) -> io::Result<()> {
    let invalid_types = [
        format!("pink morsel,abc,500,{date},north"),
        format!("pink morsel,$3.00,,{date},south"),
        format!("Pink Morsel,,12,{date},east"),
        format!("pink morsel,$3.00,lots,{date},west"),
        format!("pink morsel,-$3.00,5,{date},north"),
        "pink morsel".to_string(),
    ];

    if let Some(record) = invalid_types.choose(rng) {
        writeln!(writer, "{}", record)?;
    }

    Ok(())
}
