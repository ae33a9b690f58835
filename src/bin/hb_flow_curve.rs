use hbfluid::prelude::*;
use russell_lab::Vector;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "hb_flow_curve",
    about = "Prints the simple-shear flow curve of a Herschel-Bulkley material"
)]
struct Options {
    /// JSON file with the material properties
    material: String,

    /// Minimum equivalent strain rate
    #[structopt(long, default_value = "1e-4")]
    min: f64,

    /// Maximum equivalent strain rate
    #[structopt(long, default_value = "1e3")]
    max: f64,

    /// Number of points (log-spaced)
    #[structopt(long, default_value = "15")]
    npoint: usize,
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();
    if options.min <= 0.0 || options.max <= options.min {
        return Err("the strain rate range must satisfy 0 < min < max");
    }
    if options.npoint < 2 {
        return Err("the number of points must be at least 2");
    }

    // load and check the material
    let props = Properties::read_json(&options.material)?;
    let law = HerschelBulkley2D::new();
    let report = law.check(&props);
    if !report.is_valid() {
        eprintln!("{}", report);
        return Err("invalid material properties");
    }
    let param = ParamHerschelBulkley::from_properties(&props)?;

    // simple shear: γ̇ = 2 εxy and τ = σxy
    let mut stress = Vector::new(law.strain_size());
    let mut strain_rate = Vector::new(law.strain_size());
    let log_min = f64::log10(options.min);
    let step = (f64::log10(options.max) - log_min) / ((options.npoint - 1) as f64);
    println!("{:>14}{:>14}{:>14}", "rate", "viscosity", "shear stress");
    for i in 0..options.npoint {
        let rate = f64::powf(10.0, log_min + (i as f64) * step);
        strain_rate[2] = rate / 2.0;
        let viscosity = law.response(&mut stress, None, &param, &strain_rate)?;
        println!("{:>14.6e}{:>14.6e}{:>14.6e}", rate, viscosity, stress[2]);
    }
    Ok(())
}
